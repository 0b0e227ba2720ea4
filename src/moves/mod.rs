// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça.

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod queen;
pub mod king;

use crate::core::{iter_squares, Bitboard, Move, Square};

/// Acrescenta um lance simples por cada casa de destino do bitboard.
#[inline]
pub(crate) fn push_targets(moves: &mut Vec<Move>, from: Square, targets: Bitboard) {
    for to in iter_squares(targets) {
        moves.push(Move::new(from, to));
    }
}
