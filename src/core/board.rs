// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::types::*;
use crate::error::FenError;
use crate::moves;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// A struct principal do tabuleiro, usando Bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Bitboards para cada tipo de peça.
    pub pawns: Bitboard,
    pub knights: Bitboard,
    pub bishops: Bitboard,
    pub rooks: Bitboard,
    pub queens: Bitboard,
    pub kings: Bitboard,

    // Bitboards para as peças de cada cor.
    pub white_pieces: Bitboard,
    pub black_pieces: Bitboard,

    // De quem é a vez de jogar.
    pub to_move: Color,

    pub en_passant_target: Option<Square>,

    // Direitos de roque (pode_rocar_pequeno_brancas, pode_rocar_grande_brancas, pode_rocar_pequeno_pretas, pode_rocar_grande_pretas)
    pub castling_rights: u8, // Bits: 0=K, 1=Q, 2=k, 3=q

    // Cache do estado de xeque
    pub white_king_in_check: bool,
    pub black_king_in_check: bool,

    pub halfmove_clock: u16,   // Contador para regra dos 50 movimentos
    pub fullmove_number: u16,  // Incrementa depois de cada lance das pretas
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Tabuleiro sem peças, brancas a jogar.
    pub fn empty() -> Self {
        Board {
            pawns: 0, knights: 0, bishops: 0, rooks: 0, queens: 0, kings: 0,
            white_pieces: 0, black_pieces: 0,
            to_move: Color::White, en_passant_target: None, castling_rights: 0,
            white_king_in_check: false, black_king_in_check: false,
            halfmove_clock: 0, fullmove_number: 1,
        }
    }

    /// Cria um novo tabuleiro na posição inicial padrão usando bitboards.
    pub fn new() -> Self {
        const WHITE_PAWNS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_11111111_00000000;
        const WHITE_ROOKS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_10000001;
        const WHITE_KNIGHTS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_01000010;
        const WHITE_BISHOPS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_00100100;
        const WHITE_QUEEN: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_00001000;
        const WHITE_KING: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_00010000;

        const BLACK_PAWNS: Bitboard = 0b00000000_11111111_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_ROOKS: Bitboard = 0b10000001_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_KNIGHTS: Bitboard = 0b01000010_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_BISHOPS: Bitboard = 0b00100100_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_QUEEN: Bitboard = 0b00001000_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_KING: Bitboard = 0b00010000_00000000_00000000_00000000_00000000_00000000_00000000_00000000;

        Board {
            pawns: WHITE_PAWNS | BLACK_PAWNS,
            knights: WHITE_KNIGHTS | BLACK_KNIGHTS,
            bishops: WHITE_BISHOPS | BLACK_BISHOPS,
            rooks: WHITE_ROOKS | BLACK_ROOKS,
            queens: WHITE_QUEEN | BLACK_QUEEN,
            kings: WHITE_KING | BLACK_KING,
            white_pieces: WHITE_PAWNS | WHITE_ROOKS | WHITE_KNIGHTS | WHITE_BISHOPS | WHITE_QUEEN | WHITE_KING,
            black_pieces: BLACK_PAWNS | BLACK_ROOKS | BLACK_KNIGHTS | BLACK_BISHOPS | BLACK_QUEEN | BLACK_KING,
            to_move: Color::White,
            en_passant_target: None,
            castling_rights: CASTLE_ALL, // Todos os roques inicialmente permitidos
            white_king_in_check: false,
            black_king_in_check: false,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Cria um novo tabuleiro a partir de uma string FEN.
    /// Aceita também FEN com apenas os quatro primeiros campos (contadores 0 e 1).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 && parts.len() != 4 {
            return Err(FenError::WrongFieldCount(parts.len()));
        }

        let mut board = Board::empty();

        // Parse board (parts[0]), começando pela fileira 8
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRankCount(rows.len()));
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx as u8;
            let mut file = 0u8;
            for ch in row.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    file = file.saturating_add(digit as u8); // Casas vazias
                } else {
                    let piece = Piece::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    if file >= 8 {
                        return Err(FenError::BadRankLength { rank: rank as usize + 1 });
                    }
                    board.put_piece(rank * 8 + file, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankLength { rank: rank as usize + 1 });
            }
        }

        // To move (parts[1])
        board.to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidTurn(other.to_string())),
        };

        // Castling (parts[2])
        for ch in parts[2].chars() {
            match ch {
                'K' => board.castling_rights |= CASTLE_WHITE_KINGSIDE,
                'Q' => board.castling_rights |= CASTLE_WHITE_QUEENSIDE,
                'k' => board.castling_rights |= CASTLE_BLACK_KINGSIDE,
                'q' => board.castling_rights |= CASTLE_BLACK_QUEENSIDE,
                '-' => {},
                _ => return Err(FenError::InvalidCastling(parts[2].to_string())),
            }
        }

        // En passant (parts[3])
        if parts[3] != "-" {
            let sq = parse_square(parts[3]).ok_or_else(|| FenError::InvalidEnPassant(parts[3].to_string()))?;
            board.en_passant_target = Some(sq);
        }

        // Contadores (parts[4], parts[5])
        if parts.len() == 6 {
            board.halfmove_clock = parts[4]
                .parse()
                .map_err(|_| FenError::InvalidCounter(parts[4].to_string()))?;
            board.fullmove_number = parts[5]
                .parse()
                .map_err(|_| FenError::InvalidCounter(parts[5].to_string()))?;
        }

        board.update_check_cache();
        Ok(board)
    }

    // ========================================================================
    // ACESSO ÀS PEÇAS
    // ========================================================================

    #[inline]
    pub fn color_bb(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white_pieces,
            Color::Black => self.black_pieces,
        }
    }

    #[inline]
    pub fn kind_bb(&self, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::Pawn => self.pawns,
            PieceKind::Knight => self.knights,
            PieceKind::Bishop => self.bishops,
            PieceKind::Rook => self.rooks,
            PieceKind::Queen => self.queens,
            PieceKind::King => self.kings,
        }
    }

    fn kind_bb_mut(&mut self, kind: PieceKind) -> &mut Bitboard {
        match kind {
            PieceKind::Pawn => &mut self.pawns,
            PieceKind::Knight => &mut self.knights,
            PieceKind::Bishop => &mut self.bishops,
            PieceKind::Rook => &mut self.rooks,
            PieceKind::Queen => &mut self.queens,
            PieceKind::King => &mut self.kings,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white_pieces | self.black_pieces
    }

    /// Peça numa casa. Casas fora do tabuleiro estão sempre vazias.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq >= 64 {
            return None;
        }
        let bb = 1u64 << sq;
        let color = if (self.white_pieces & bb) != 0 {
            Color::White
        } else if (self.black_pieces & bb) != 0 {
            Color::Black
        } else {
            return None;
        };

        let kind = if (self.pawns & bb) != 0 { PieceKind::Pawn }
            else if (self.knights & bb) != 0 { PieceKind::Knight }
            else if (self.bishops & bb) != 0 { PieceKind::Bishop }
            else if (self.rooks & bb) != 0 { PieceKind::Rook }
            else if (self.queens & bb) != 0 { PieceKind::Queen }
            else { PieceKind::King };

        Some(Piece::new(kind, color))
    }

    /// Peça nas coordenadas (coluna, fileira), com verificação de limites.
    pub fn piece_at_coords(&self, file: i8, rank: i8) -> Option<Piece> {
        square_from_coords(file, rank).and_then(|sq| self.piece_at(sq))
    }

    /// Coloca (ou remove, com `None`) uma peça. Fora do tabuleiro não faz nada.
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        if sq >= 64 {
            return;
        }
        self.clear_square(sq);
        if let Some(piece) = piece {
            self.put_piece(sq, piece);
        }
        self.update_check_cache();
    }

    fn clear_square(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        let mask = !(1u64 << sq);
        *self.kind_bb_mut(piece.kind) &= mask;
        self.white_pieces &= mask;
        self.black_pieces &= mask;
        Some(piece)
    }

    // A casa tem de estar vazia.
    fn put_piece(&mut self, sq: Square, piece: Piece) {
        let bb = 1u64 << sq;
        *self.kind_bb_mut(piece.kind) |= bb;
        match piece.color {
            Color::White => self.white_pieces |= bb,
            Color::Black => self.black_pieces |= bb,
        }
    }

    /// Todas as peças de uma cor com as respetivas casas, de a1 para h8.
    pub fn pieces(&self, color: Color) -> Vec<(Square, Piece)> {
        iter_squares(self.color_bb(color))
            .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
            .collect()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king_bb = self.kings & self.color_bb(color);
        if king_bb == 0 {
            None
        } else {
            Some(king_bb.trailing_zeros() as Square)
        }
    }

    // ========================================================================
    // GERAÇÃO DE LANCES
    // ========================================================================

    /// Gera todos os lances pseudo-legais para todas as peças do jogador atual.
    pub fn generate_all_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        moves.extend(moves::pawn::generate_pawn_moves(self));
        moves.extend(moves::knight::generate_knight_moves(self));
        moves.extend(moves::sliding::generate_sliding_moves(self, PieceKind::Bishop));
        moves.extend(moves::sliding::generate_sliding_moves(self, PieceKind::Rook));
        moves.extend(moves::queen::generate_queen_moves(self));
        moves.extend(moves::king::generate_king_moves(self));

        moves
    }

    /// Gera apenas movimentos legais (filtra movimentos que deixam o rei em xeque)
    pub fn generate_legal_moves(&self) -> Vec<Move> {
        self.generate_all_moves()
            .into_iter()
            .filter(|&mv| self.is_legal_move(mv))
            .collect()
    }

    /// Lances legais de uma cor qualquer, simulando a troca de turno se preciso.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        if self.to_move == color {
            self.generate_legal_moves()
        } else {
            let mut temp = *self;
            temp.to_move = color;
            temp.generate_legal_moves()
        }
    }

    /// Verifica se um movimento pseudo-legal é legal: jogado numa cópia,
    /// não pode deixar o rei de quem joga em xeque.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        let mut temp = *self;
        if !temp.make_move(mv) {
            return false;
        }
        !temp.is_king_in_check(self.to_move)
    }

    pub fn has_legal_moves(&self) -> bool {
        self.generate_all_moves().into_iter().any(|mv| self.is_legal_move(mv))
    }

    // ========================================================================
    // EXECUÇÃO DE LANCES
    // ========================================================================

    /// Aplica um lance. Com `enforce_legality`, só aceita lances do conjunto de
    /// lances legais (usando as flags do lance gerado); caso contrário aplica
    /// sem verificar. Devolve `false` sem alterar o tabuleiro se falhar.
    pub fn apply_move(&mut self, mv: Move, enforce_legality: bool) -> bool {
        let mv = if enforce_legality {
            match self.generate_legal_moves().into_iter().find(|legal| *legal == mv) {
                Some(legal) => legal,
                None => return false,
            }
        } else {
            mv
        };
        self.make_move(mv)
    }

    /// Executa um lance sem verificar a legalidade.
    pub fn make_move(&mut self, mv: Move) -> bool {
        self.make_move_with_undo(mv).is_some()
    }

    /// Executa um lance e devolve a informação para o desfazer.
    /// Devolve `None` (sem alterações) se não houver peça na origem.
    pub fn make_move_with_undo(&mut self, mv: Move) -> Option<UndoInfo> {
        let moving = self.piece_at(mv.from)?;
        let moving_color = moving.color;

        let mut undo = UndoInfo {
            moved_piece: moving,
            captured_piece: None,
            captured_square: mv.to,
            old_castling_rights: self.castling_rights,
            old_en_passant_target: self.en_passant_target,
            old_halfmove_clock: self.halfmove_clock,
            old_fullmove_number: self.fullmove_number,
            old_white_king_in_check: self.white_king_in_check,
            old_black_king_in_check: self.black_king_in_check,
        };

        if mv.is_castling {
            // Rei e torre movem-se juntos
            self.clear_square(mv.from);
            self.put_piece(mv.to, moving);
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            if let Some(rook) = self.clear_square(rook_from) {
                self.put_piece(rook_to, rook);
            }
        } else if mv.is_en_passant {
            // O peão capturado está na coluna do destino e na fileira da origem
            let captured_sq = rank_of(mv.from) * 8 + file_of(mv.to);
            undo.captured_piece = self.clear_square(captured_sq);
            undo.captured_square = captured_sq;
            self.clear_square(mv.from);
            self.put_piece(mv.to, moving);
        } else {
            undo.captured_piece = self.clear_square(mv.to);
            self.clear_square(mv.from);
            let placed = match mv.promotion {
                Some(kind) => Piece::new(kind, moving_color),
                None => moving,
            };
            self.put_piece(mv.to, placed);
        }

        // Regra dos 50 movimentos
        if moving.kind == PieceKind::Pawn || undo.captured_piece.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        // En passant só vale no lance imediatamente seguinte
        self.en_passant_target = None;
        if moving.kind == PieceKind::Pawn && (mv.to as i8 - mv.from as i8).abs() == 16 {
            self.en_passant_target = Some((mv.from + mv.to) / 2);
        }

        // Remove direitos de roque quando o rei se move
        if moving.kind == PieceKind::King {
            match moving_color {
                Color::White => self.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE),
                Color::Black => self.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE),
            }
        }

        // Atualiza direitos de roque quando torres se movem ou são capturadas
        if mv.from == 0 || mv.to == 0 { self.castling_rights &= !CASTLE_WHITE_QUEENSIDE; } // a1
        if mv.from == 7 || mv.to == 7 { self.castling_rights &= !CASTLE_WHITE_KINGSIDE; } // h1
        if mv.from == 56 || mv.to == 56 { self.castling_rights &= !CASTLE_BLACK_QUEENSIDE; } // a8
        if mv.from == 63 || mv.to == 63 { self.castling_rights &= !CASTLE_BLACK_KINGSIDE; } // h8

        if moving_color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.to_move = !self.to_move;

        self.update_check_cache();
        Some(undo)
    }

    /// Desfaz um lance feito com `make_move_with_undo`, restaurando o tabuleiro exatamente.
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        self.clear_square(mv.to);
        if mv.is_castling {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            if let Some(rook) = self.clear_square(rook_to) {
                self.put_piece(rook_from, rook);
            }
        }
        self.put_piece(mv.from, undo.moved_piece);
        if let Some(captured) = undo.captured_piece {
            self.put_piece(undo.captured_square, captured);
        }

        self.to_move = !self.to_move;
        self.castling_rights = undo.old_castling_rights;
        self.en_passant_target = undo.old_en_passant_target;
        self.halfmove_clock = undo.old_halfmove_clock;
        self.fullmove_number = undo.old_fullmove_number;
        self.white_king_in_check = undo.old_white_king_in_check;
        self.black_king_in_check = undo.old_black_king_in_check;
    }

    // ========================================================================
    // ATAQUES E XEQUE
    // ========================================================================

    /// Verifica se o rei da cor especificada está em xeque (usa cache)
    pub fn is_king_in_check(&self, color: Color) -> bool {
        if color == Color::White {
            self.white_king_in_check
        } else {
            self.black_king_in_check
        }
    }

    /// Atualiza o cache de estado de xeque para ambos os reis
    fn update_check_cache(&mut self) {
        self.white_king_in_check = self.compute_king_in_check(Color::White);
        self.black_king_in_check = self.compute_king_in_check(Color::Black);
    }

    /// Calcula se o rei da cor especificada está em xeque (sem usar cache)
    fn compute_king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_square) => self.is_square_attacked_by(king_square, !color),
            None => false, // Não há rei (situação anormal)
        }
    }

    /// Verifica se uma casa é atacada por peças da cor especificada
    pub fn is_square_attacked_by(&self, square: Square, attacking_color: Color) -> bool {
        let square_bb = 1u64 << square;
        let attacking_pieces = self.color_bb(attacking_color);

        if attacking_pieces == 0 { return false; }

        // Peões atacam só na diagonal, no sentido do avanço
        let pawn_attacks = if attacking_color == Color::White {
            ((square_bb >> 7) & NOT_A_FILE) | ((square_bb >> 9) & NOT_H_FILE)
        } else {
            ((square_bb << 7) & NOT_H_FILE) | ((square_bb << 9) & NOT_A_FILE)
        };
        if (pawn_attacks & self.pawns & attacking_pieces) != 0 { return true; }

        if (moves::knight::get_knight_attacks_lookup(square) & self.knights & attacking_pieces) != 0 {
            return true;
        }

        if (moves::king::get_king_attacks_lookup(square) & self.kings & attacking_pieces) != 0 {
            return true;
        }

        let occupancy = self.occupied();
        let diagonal = (self.bishops | self.queens) & attacking_pieces;
        if diagonal != 0 && (moves::sliding::get_bishop_attacks(square, occupancy) & diagonal) != 0 {
            return true;
        }

        let orthogonal = (self.rooks | self.queens) & attacking_pieces;
        if orthogonal != 0 && (moves::sliding::get_rook_attacks(square, occupancy) & orthogonal) != 0 {
            return true;
        }

        false
    }

    // ========================================================================
    // FIM DE JOGO
    // ========================================================================

    /// Verifica se a posição atual é xeque-mate
    pub fn is_checkmate(&self) -> bool {
        self.is_king_in_check(self.to_move) && !self.has_legal_moves()
    }

    /// Verifica se a posição atual é empate por afogamento
    pub fn is_stalemate(&self) -> bool {
        !self.is_king_in_check(self.to_move) && !self.has_legal_moves()
    }

    /// Verifica se há empate pela regra dos 50 movimentos
    pub fn is_draw_by_50_moves(&self) -> bool {
        self.halfmove_clock >= 100 // 50 movimentos = 100 half-moves
    }

    /// Classifica a posição para o jogador atual: mate, afogamento e regra
    /// dos 50 movimentos, por esta ordem.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.has_legal_moves() {
            if self.is_king_in_check(self.to_move) {
                return Some(GameOutcome::Checkmate { winner: !self.to_move });
            }
            return Some(GameOutcome::Stalemate);
        }
        if self.is_draw_by_50_moves() {
            return Some(GameOutcome::DrawByFiftyMoves);
        }
        None
    }

    /// Verifica se o jogo acabou (xeque-mate ou empate)
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

/// Casas de origem e destino da torre num roque, a partir do destino do rei.
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let base = rank_of(king_to) * 8;
    if file_of(king_to) == 6 {
        (base + 7, base + 5) // Roque pequeno: h -> f
    } else {
        (base, base + 3) // Roque grande: a -> d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(board: &Board, text: &str) -> Move {
        board
            .generate_legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == text)
            .unwrap_or_else(|| panic!("{} is not legal", text))
    }

    #[test]
    fn test_new_matches_starting_fen() {
        let from_fen = Board::from_fen(STARTING_FEN).unwrap();
        assert_eq!(Board::new(), from_fen);
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(board.generate_legal_moves().len(), 20);
        assert_eq!(board.legal_moves_for(Color::Black).len(), 20);
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(Board::from_fen("8/8/8 w - -"), Err(FenError::WrongRankCount(3)));
        assert_eq!(Board::from_fen("8/8/8/8/8/8/8/8 w -"), Err(FenError::WrongFieldCount(3)));
        assert!(matches!(Board::from_fen("8/8/8/8/8/8/8/7x w - -"), Err(FenError::InvalidPiece('x'))));
        assert!(matches!(Board::from_fen("8/8/8/8/8/8/8/9 w - -"), Err(FenError::BadRankLength { .. })));
        assert!(matches!(Board::from_fen("8/8/8/8/8/8/8/8 x - -"), Err(FenError::InvalidTurn(_))));
        assert!(matches!(Board::from_fen("8/8/8/8/8/8/8/8 w - z9"), Err(FenError::InvalidEnPassant(_))));
        assert!(matches!(Board::from_fen("8/8/8/8/8/8/8/8 w - - a 1"), Err(FenError::InvalidCounter(_))));
    }

    #[test]
    fn test_piece_access_is_bounds_checked() {
        let mut board = Board::new();
        assert_eq!(board.piece_at_coords(4, 0), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.piece_at_coords(8, 0), None);
        assert_eq!(board.piece_at_coords(-1, 3), None);
        assert_eq!(board.piece_at(64), None);

        let before = board;
        board.set_piece(200, Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(board, before);

        board.set_piece(28, Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(board.piece_at(28), Some(Piece::new(PieceKind::Knight, Color::Black)));
        board.set_piece(28, None);
        assert_eq!(board.piece_at(28), None);
    }

    #[test]
    fn test_pieces_and_king_square() {
        let board = Board::new();
        assert_eq!(board.pieces(Color::White).len(), 16);
        assert_eq!(board.king_square(Color::White), Some(4));
        assert_eq!(board.king_square(Color::Black), Some(60));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_pawn_attacks_are_diagonal_only() {
        let board = Board::from_fen("8/8/8/8/4P3/8/8/8 w - - 0 1").unwrap();
        // e4 ataca d5 e f5, mas não e5
        assert!(board.is_square_attacked_by(35, Color::White));
        assert!(board.is_square_attacked_by(37, Color::White));
        assert!(!board.is_square_attacked_by(36, Color::White));
    }

    #[test]
    fn test_sliding_attacks_are_blocked() {
        let board = Board::from_fen("8/8/8/8/8/8/8/R1n4k w - - 0 1").unwrap();
        assert!(board.is_square_attacked_by(2, Color::White)); // c1, o bloqueador
        assert!(!board.is_square_attacked_by(3, Color::White)); // d1, atrás do cavalo
    }

    #[test]
    fn test_turn_alternates_and_counters_update() {
        let mut board = Board::new();
        assert!(board.apply_move(find(&board, "g1f3"), true));
        assert_eq!(board.to_move, Color::Black);
        assert_eq!(board.halfmove_clock, 1);
        assert_eq!(board.fullmove_number, 1);

        assert!(board.apply_move(find(&board, "e7e5"), true));
        assert_eq!(board.to_move, Color::White);
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.fullmove_number, 2);
        assert_eq!(board.en_passant_target, Some(44)); // e6
    }

    #[test]
    fn test_counters_saturate_at_limit() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 65535 1").unwrap();
        assert!(board.apply_move(Move::new(0, 8), true));
        assert_eq!(board.halfmove_clock, u16::MAX);
        assert_eq!(board.outcome(), Some(GameOutcome::DrawByFiftyMoves));

        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 65535").unwrap();
        assert!(board.apply_move(Move::new(60, 52), true));
        assert_eq!(board.fullmove_number, u16::MAX);
    }

    #[test]
    fn test_illegal_move_is_rejected_without_mutation() {
        let mut board = Board::new();
        let before = board;
        assert!(!board.apply_move(Move::new(12, 36), true)); // e2e5
        assert!(!board.apply_move(Move::new(28, 36), true)); // casa vazia
        assert_eq!(board, before);
    }

    #[test]
    fn test_unchecked_move_on_empty_origin_fails() {
        let mut board = Board::new();
        let before = board;
        assert!(!board.apply_move(Move::new(28, 36), false));
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_resets_halfmove_clock() {
        let mut board = Board::from_fen("4k3/8/8/3p4/8/8/8/3RK3 w - - 7 30").unwrap();
        assert!(board.apply_move(find(&board, "d1d5"), true));
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.piece_at(35), Some(Piece::new(PieceKind::Rook, Color::White)));
    }

    #[test]
    fn test_castling_moves_king_and_rook_together() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let castle = find(&board, "e1g1");
        assert!(castle.is_castling);
        assert!(board.apply_move(castle, true));
        assert_eq!(board.piece_at(6), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.piece_at(5), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_at(7), None);
        assert_eq!(board.piece_at(4), None);
        assert_eq!(board.castling_rights & (CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE), 0);

        let castle = find(&board, "e8c8");
        assert!(board.apply_move(castle, true));
        assert_eq!(board.piece_at(58), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(board.piece_at(59), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(board.piece_at(56), None);
    }

    #[test]
    fn test_castling_blocked_by_attack_or_check() {
        // Bispo preto em c4 ataca f1: sem roque pequeno
        let board = Board::from_fen("4k3/8/8/8/2b5/8/8/R3K2R w KQ - 0 1").unwrap();
        let moves: Vec<String> = board.generate_legal_moves().iter().map(|m| m.to_string()).collect();
        assert!(!moves.contains(&"e1g1".to_string()));
        assert!(moves.contains(&"e1c1".to_string()));

        // Rei em xeque: nenhum roque
        let board = Board::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
        assert!(board.generate_legal_moves().iter().all(|m| !m.is_castling));

        // Casa entre rei e torre ocupada
        let board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").unwrap();
        let moves: Vec<String> = board.generate_legal_moves().iter().map(|m| m.to_string()).collect();
        assert!(!moves.contains(&"e1c1".to_string()));
        assert!(moves.contains(&"e1g1".to_string()));
    }

    #[test]
    fn test_rook_capture_removes_castling_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(board.apply_move(find(&board, "a1a8"), true));
        assert_eq!(board.castling_rights & CASTLE_WHITE_QUEENSIDE, 0);
        assert_eq!(board.castling_rights & CASTLE_BLACK_QUEENSIDE, 0);
        assert_ne!(board.castling_rights & CASTLE_BLACK_KINGSIDE, 0);
    }

    #[test]
    fn test_en_passant_window_is_one_ply() {
        let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
        assert!(board.apply_move(find(&board, "d7d5"), true));
        assert_eq!(board.en_passant_target, Some(43)); // d6

        let ep = find(&board, "e5d6");
        assert!(ep.is_en_passant);

        let mut captured = board;
        assert!(captured.apply_move(ep, true));
        assert_eq!(captured.piece_at(35), None); // d5 removido
        assert_eq!(captured.piece_at(43), Some(Piece::new(PieceKind::Pawn, Color::White)));

        // Se as brancas não capturarem logo, a oportunidade desaparece
        assert!(board.apply_move(find(&board, "e1f1"), true));
        assert!(board.apply_move(find(&board, "e8f8"), true));
        assert_eq!(board.en_passant_target, None);
        assert!(board.generate_legal_moves().iter().all(|m| !m.is_en_passant));
    }

    #[test]
    fn test_promotion_expands_to_four_pieces() {
        let mut board = Board::from_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").unwrap();
        let promotions: Vec<Move> = board
            .generate_legal_moves()
            .into_iter()
            .filter(|m| m.promotion.is_some())
            .collect();
        assert_eq!(promotions.len(), 4);

        assert!(board.apply_move(Move::with_promotion(52, 60, PieceKind::Knight), true));
        assert_eq!(board.piece_at(60), Some(Piece::new(PieceKind::Knight, Color::White)));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // Cavalo em e2 cravado pela torre em e8
        let board = Board::from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(board.generate_legal_moves().iter().all(|m| m.from != 12));
    }

    #[test]
    fn test_make_unmake_restores_board() {
        let fens = [
            STARTING_FEN,
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        ];
        for fen in fens {
            let board = Board::from_fen(fen).unwrap();
            for mv in board.generate_all_moves() {
                let mut working = board;
                let undo = working.make_move_with_undo(mv).unwrap();
                working.unmake_move(mv, undo);
                assert_eq!(working, board, "unmake de {} em {}", mv, fen);
            }
        }
    }

    #[test]
    fn test_outcome_priority() {
        // Mate tem prioridade sobre a regra dos 50 movimentos
        let mate = Board::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 120 80").unwrap();
        assert_eq!(mate.outcome(), Some(GameOutcome::Checkmate { winner: Color::White }));

        let fifty = Board::from_fen("4k3/8/8/8/8/8/8/QQQQK3 w - - 100 80").unwrap();
        assert_eq!(fifty.outcome(), Some(GameOutcome::DrawByFiftyMoves));

        assert_eq!(Board::new().outcome(), None);
    }
}
