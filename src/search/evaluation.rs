use crate::core::*;

// Tabelas posicionais do ponto de vista das brancas, com a fileira 8 em cima
// (linha 0 = fileira 8). As pretas leem-nas espelhadas na vertical.

const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

// Sem distinção de fase de jogo: sempre a tabela de meio-jogo
const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

pub const MOBILITY_WEIGHT: i32 = 10;
pub const CHECK_BONUS: i32 = 50;

/// Bónus posicional de uma peça numa casa.
pub fn positional_bonus(piece: Piece, sq: Square) -> i32 {
    let rank = rank_of(sq) as usize;
    let row = match piece.color {
        Color::White => 7 - rank,
        Color::Black => rank,
    };
    let col = file_of(sq) as usize;

    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[row][col]
}

/// Avalia a posição do ponto de vista de `perspective`:
/// material + tabelas posicionais + mobilidade + segurança do rei.
pub fn evaluate_position(board: &Board, perspective: Color) -> i32 {
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = if color == perspective { 1 } else { -1 };
        for (sq, piece) in board.pieces(color) {
            score += sign * (piece.kind.value() + positional_bonus(piece, sq));
        }
    }

    // Bônus de mobilidade
    let our_moves = count_legal_moves(board, perspective) as i32;
    let their_moves = count_legal_moves(board, !perspective) as i32;
    score += (our_moves - their_moves) * MOBILITY_WEIGHT;

    // Segurança do rei: os dois termos são independentes
    if board.is_king_in_check(perspective) {
        score -= CHECK_BONUS;
    }
    if board.is_king_in_check(!perspective) {
        score += CHECK_BONUS;
    }

    score
}

/// Conta número de movimentos legais para uma cor
fn count_legal_moves(board: &Board, color: Color) -> usize {
    board.legal_moves_for(color).len()
}
