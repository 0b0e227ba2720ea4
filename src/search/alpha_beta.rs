use crate::core::*;
use crate::search::config::SearchConfig;
use crate::search::evaluation::evaluate_position;
use crate::search::move_ordering::order_moves;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Pontuação base de uma vitória; a profundidade restante é somada
/// para preferir mates mais rápidos.
pub const MATE_SCORE: i32 = 10000;

/// Resultado da busca Alpha-Beta
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
}

/// Motor Minimax com poda Alpha-Beta, de profundidade fixa
pub struct Engine {
    config: SearchConfig,
    rng: StdRng,
    nodes_searched: u64,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng, nodes_searched: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Escolhe um lance para o lado a jogar. `best_move` é `None` só quando não há lances legais.
    pub fn best_move(&mut self, board: &Board) -> SearchResult {
        if self.config.difficulty.is_random() {
            return self.random_move(board);
        }
        self.search(board, self.config.difficulty.depth())
    }

    /// Escolhe um lance para `side`, mesmo que não seja a sua vez: procura numa
    /// cópia com a vez trocada, como `Board::legal_moves_for`.
    pub fn best_move_for(&mut self, board: &Board, side: Color) -> SearchResult {
        if board.to_move == side {
            return self.best_move(board);
        }
        let mut position = *board;
        position.to_move = side;
        self.best_move(&position)
    }

    /// Nível 1: lance legal uniformemente aleatório, sem busca
    fn random_move(&mut self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let moves = board.generate_legal_moves();
        let best_move = moves.choose(&mut self.rng).copied();
        debug!(
            "random move {} chosen among {} legal moves",
            best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
            moves.len()
        );
        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes_searched: 0,
            time_elapsed: start.elapsed(),
        }
    }

    /// Busca com limite de profundidade
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes_searched = 0;
        let start = Instant::now();
        let perspective = board.to_move;

        let mut ordered_moves = board.generate_legal_moves();
        order_moves(board, &mut ordered_moves);

        // Tabuleiro de trabalho: o do chamador nunca é alterado
        let mut work = *board;
        let mut best_move = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for &mv in &ordered_moves {
            let Some(undo) = work.make_move_with_undo(mv) else {
                continue;
            };
            let score = self.minimax(&mut work, depth.saturating_sub(1), alpha, beta, false, perspective);
            work.unmake_move(mv, undo);
            debug!("root move {} scored {}", mv, score);

            // Só um valor estritamente maior substitui: o primeiro melhor fica
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        let time_elapsed = start.elapsed();
        let score = if best_move.is_some() { best_score } else { 0 };
        let result = SearchResult {
            best_move,
            score,
            depth,
            nodes_searched: self.nodes_searched,
            time_elapsed,
        };
        self.log_search(&result);
        result
    }

    /// Minimax com poda Alpha-Beta, sempre do ponto de vista de `perspective`.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        perspective: Color,
    ) -> i32 {
        self.nodes_searched += 1;

        if let Some(outcome) = board.outcome() {
            let remaining = depth as i32;
            return match outcome.winner() {
                Some(winner) if winner == perspective => MATE_SCORE + remaining,
                Some(_) => -MATE_SCORE - remaining,
                None => 0,
            };
        }

        if depth == 0 {
            return evaluate_position(board, perspective);
        }

        let mut moves = board.generate_legal_moves();
        if moves.is_empty() {
            return 0;
        }
        order_moves(board, &mut moves);

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &mv in &moves {
            let Some(undo) = board.make_move_with_undo(mv) else {
                continue;
            };
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing, perspective);
            board.unmake_move(mv, undo);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            // Poda
            if beta <= alpha {
                break;
            }
        }

        best
    }

    fn log_search(&self, result: &SearchResult) {
        let secs = result.time_elapsed.as_secs_f64();
        let nps = if secs > 0.0 { (result.nodes_searched as f64 / secs) as u64 } else { 0 };
        info!(
            "depth {} score {} nodes {} time {}ms nps {} best {}",
            result.depth,
            result.score,
            result.nodes_searched,
            result.time_elapsed.as_millis(),
            nps,
            result.best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string())
        );
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
