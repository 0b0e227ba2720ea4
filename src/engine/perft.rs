// Ficheiro: src/engine/perft.rs
// Descrição: Contagem de folhas da árvore de lances legais (perft),
// usada para validar o gerador de movimentos.

use crate::core::{Board, Move};

/// Número de posições folha a `depth` meios-lances de `board`.
pub fn perft(board: &Board, depth: u8) -> u64 {
    let mut work = *board;
    perft_recursive(&mut work, depth)
}

/// Perft por lance da raiz, na ordem de geração.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut work = *board;
    let mut results = Vec::new();
    for mv in board.generate_legal_moves() {
        if let Some(undo) = work.make_move_with_undo(mv) {
            let nodes = perft_recursive(&mut work, depth - 1);
            work.unmake_move(mv, undo);
            results.push((mv, nodes));
        }
    }
    results
}

fn perft_recursive(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_legal_moves();
    // Folhas contadas diretamente no último nível
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        if let Some(undo) = board.make_move_with_undo(mv) {
            nodes += perft_recursive(board, depth - 1);
            board.unmake_move(mv, undo);
        }
    }
    nodes
}
