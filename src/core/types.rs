// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;

// Um Bitboard é um inteiro de 64 bits sem sinal. Cada bit representa uma casa.
// Bit 0 = a1, Bit 1 = b1, ..., Bit 63 = h8.
pub type Bitboard = u64;

// Índice de casa: rank * 8 + file, a1 = 0, h8 = 63.
pub type Square = u8;

pub const NOT_A_FILE: Bitboard = 0xfefefefefefefefe;
pub const NOT_H_FILE: Bitboard = 0x7f7f7f7f7f7f7f7f;

// Direitos de roque (bits): 0=K, 1=Q, 2=k, 3=q
pub const CASTLE_WHITE_KINGSIDE: u8 = 0b0001;
pub const CASTLE_WHITE_QUEENSIDE: u8 = 0b0010;
pub const CASTLE_BLACK_KINGSIDE: u8 = 0b0100;
pub const CASTLE_BLACK_QUEENSIDE: u8 = 0b1000;
pub const CASTLE_ALL: u8 = 0b1111;

/// Converte coordenadas (coluna, fileira) em casa. Fora do tabuleiro devolve `None`.
#[inline]
pub fn square_from_coords(file: i8, rank: i8) -> Option<Square> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank * 8 + file) as Square)
    } else {
        None
    }
}

#[inline]
pub fn file_of(sq: Square) -> u8 {
    sq % 8
}

#[inline]
pub fn rank_of(sq: Square) -> u8 {
    sq / 8
}

/// Nome algébrico da casa ("e4").
pub fn square_name(sq: Square) -> String {
    let file = file_of(sq) + b'a';
    let rank = rank_of(sq) + b'1';
    format!("{}{}", file as char, rank as char)
}

/// Interpreta o nome algébrico de uma casa ("e4"). Aceita apenas minúsculas.
pub fn parse_square(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].wrapping_sub(b'a') as i8;
    let rank = bytes[1].wrapping_sub(b'1') as i8;
    square_from_coords(file, rank)
}

/// Iterador sobre as casas ocupadas de um bitboard, do LSB para o MSB.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(sq)
    }
}

#[inline]
pub fn iter_squares(bb: Bitboard) -> BitboardIter {
    BitboardIter(bb)
}

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Fileira da primeira linha (onde estão rei e torres).
    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Peças possíveis numa promoção, na ordem em que são geradas.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    pub fn value(&self) -> i32 {
        match self {
            PieceKind::Pawn   => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook   => 500,
            PieceKind::Queen  => 900,
            PieceKind::King   => 20000, // Valor alto para evitar trocas
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Aceita a letra em maiúscula ou minúscula.
    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Letra FEN: maiúscula para as brancas, minúscula para as pretas.
    pub fn to_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        let kind = PieceKind::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(kind, color))
    }
}

// Struct para representar um lance no jogo.
// A identidade é (origem, destino, promoção); as flags são derivadas.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to, promotion: None, is_castling: false, is_en_passant: false }
    }

    pub fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move { promotion: Some(kind), ..Move::new(from, to) }
    }

    pub fn castling(from: Square, to: Square) -> Self {
        Move { is_castling: true, ..Move::new(from, to) }
    }

    pub fn en_passant(from: Square, to: Square) -> Self {
        Move { is_en_passant: true, ..Move::new(from, to) }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_name(self.from);
        let to = square_name(self.to);
        if let Some(p) = self.promotion {
            write!(f, "{}{}{}", from, to, p.to_char())
        } else {
            write!(f, "{}{}", from, to)
        }
    }
}

// ============================================================================
// MAKE/UNMAKE
// ============================================================================

/// Estado do tabuleiro antes de um lance, suficiente para o desfazer.
#[derive(Debug, Clone, Copy)]
pub struct UndoInfo {
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub captured_square: Square,
    pub old_castling_rights: u8,
    pub old_en_passant_target: Option<Square>,
    pub old_halfmove_clock: u16,
    pub old_fullmove_number: u16,
    pub old_white_king_in_check: bool,
    pub old_black_king_in_check: bool,
}

/// Resultado de uma partida terminada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    DrawByFiftyMoves,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Checkmate! {} wins!", winner),
            GameOutcome::Stalemate => write!(f, "Stalemate! It's a draw!"),
            GameOutcome::DrawByFiftyMoves => write!(f, "Draw by 50-move rule!"),
        }
    }
}
