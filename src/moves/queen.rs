// Ficheiro: src/moves/queen.rs
// Descrição: Lógica para gerar os lances da Dama (união de torre e bispo).

use crate::core::{Bitboard, Board, Move};
use super::push_targets;
use super::sliding::{get_bishop_attacks, get_rook_attacks};

/// Gera todos os lances pseudo-legais para a dama do jogador atual.
pub fn generate_queen_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(27);
    let our_pieces = board.color_bb(board.to_move);
    let all_pieces = board.occupied();
    let mut our_queens = board.queens & our_pieces;

    while our_queens != 0 {
        let from_sq = our_queens.trailing_zeros() as u8;
        our_queens &= our_queens - 1;

        push_targets(&mut moves, from_sq, get_queen_attacks(from_sq, all_pieces) & !our_pieces);
    }
    moves
}

#[inline]
pub fn get_queen_attacks(square: u8, occupancy: Bitboard) -> Bitboard {
    get_rook_attacks(square, occupancy) | get_bishop_attacks(square, occupancy)
}
