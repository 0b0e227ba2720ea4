use crate::core::*;

/// Bónus para lances que dão xeque ao adversário de quem joga.
pub const CHECK_ORDERING_BONUS: i32 = 100;

/// Ordena movimentos para maximizar podas Alpha-Beta.
/// Ordenação estável: lances com a mesma prioridade mantêm a ordem de geração.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(score_move(board, *mv)));
}

/// Pontua movimento para ordenação (quanto maior, melhor)
pub fn score_move(board: &Board, mv: Move) -> i32 {
    let mut score = 0;

    // ========================================================================
    // MVV-LVA (Most Valuable Victim - Least Valuable Attacker)
    // ========================================================================
    if let Some(victim) = board.piece_at(mv.to) {
        score += victim.kind.value();
        if let Some(attacker) = board.piece_at(mv.from) {
            score += mvv_lva_score(victim.kind, attacker.kind);
        }
    }

    // Promoções
    if let Some(promotion) = mv.promotion {
        score += promotion.value();
    }

    // Xeques
    let mut temp = *board;
    if temp.make_move(mv) && temp.is_king_in_check(!board.to_move) {
        score += CHECK_ORDERING_BONUS;
    }

    score
}

#[inline(always)]
fn mvv_lva_score(victim: PieceKind, attacker: PieceKind) -> i32 {
    victim.value() - attacker.value()
}
