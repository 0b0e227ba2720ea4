// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres e Bispos).

use crate::core::{Bitboard, Board, Move, PieceKind};
use super::push_targets;

pub const ROOK_DIRECTIONS: [i8; 4] = [1, -1, 8, -8];
pub const BISHOP_DIRECTIONS: [i8; 4] = [7, 9, -7, -9];

/// Percorre cada raio até ao primeiro bloqueador (inclusive), qualquer que seja a cor.
pub fn ray_attacks(square: u8, occupancy: Bitboard, directions: &[i8]) -> Bitboard {
    let mut attacks = 0u64;

    for &direction in directions {
        let mut current = square as i8;
        loop {
            let prev = current;
            current += direction;

            if current < 0 || current >= 64 { break; }

            // Verifica wrap-around
            let prev_file = prev % 8;
            let curr_file = current % 8;
            if (curr_file - prev_file).abs() > 1 { break; }

            let current_bb = 1u64 << current;
            attacks |= current_bb;

            // Se encontrou qualquer peça, para a busca nesta direção
            if (current_bb & occupancy) != 0 { break; }
        }
    }
    attacks
}

#[inline]
pub fn get_bishop_attacks(square: u8, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn get_rook_attacks(square: u8, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

/// Função genérica para gerar lances de Torres e Bispos.
pub fn generate_sliding_moves(board: &Board, piece_kind: PieceKind) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    let our_pieces = board.color_bb(board.to_move);
    let all_pieces = board.occupied();

    if !matches!(piece_kind, PieceKind::Bishop | PieceKind::Rook) {
        return moves;
    }
    let mut our_sliding_pieces = board.kind_bb(piece_kind) & our_pieces;

    while our_sliding_pieces != 0 {
        let from_sq = our_sliding_pieces.trailing_zeros() as u8;

        let attacks = if piece_kind == PieceKind::Bishop {
            get_bishop_attacks(from_sq, all_pieces)
        } else {
            get_rook_attacks(from_sq, all_pieces)
        };

        // Exclui as nossas próprias peças; a peça inimiga bloqueadora fica
        push_targets(&mut moves, from_sq, attacks & !our_pieces);

        our_sliding_pieces &= our_sliding_pieces - 1;
    }
    moves
}
