// Testes de integração do motor de busca.

use torre::search::{evaluate_position, Engine, SearchConfig, MATE_SCORE};
use torre::*;

/// Valor exato da raiz por minimax completo, sem poda.
fn exhaustive(board: &Board, depth: u8, maximizing: bool, perspective: Color) -> i32 {
    if let Some(outcome) = board.outcome() {
        return match outcome.winner() {
            Some(winner) if winner == perspective => MATE_SCORE + depth as i32,
            Some(_) => -MATE_SCORE - depth as i32,
            None => 0,
        };
    }
    if depth == 0 {
        return evaluate_position(board, perspective);
    }
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in board.generate_legal_moves() {
        let mut next = *board;
        next.make_move(mv);
        let score = exhaustive(&next, depth - 1, !maximizing, perspective);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

#[test]
fn pruning_does_not_change_the_root_value() {
    let positions = [
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ];
    for fen in positions {
        let board = Board::from_fen(fen).unwrap();
        let expected = exhaustive(&board, 2, true, board.to_move);
        let mut engine = Engine::new(SearchConfig::with_difficulty(2));
        let result = engine.best_move(&board);
        assert_eq!(result.score, expected, "{}", fen);

        // O lance escolhido atinge esse valor
        let mut after = board;
        assert!(after.apply_move(result.best_move.unwrap(), true));
        assert_eq!(exhaustive(&after, 1, false, board.to_move), expected, "{}", fen);
    }
}

#[test]
fn pruning_matches_exhaustive_minimax_at_depth_four() {
    // Posição pequena para que a árvore completa a quatro meios-lances seja barata
    let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let expected = exhaustive(&board, 4, true, board.to_move);

    let mut engine = Engine::new(SearchConfig::with_difficulty(4));
    let result = engine.best_move(&board);
    assert_eq!(result.depth, 4);
    assert_eq!(result.score, expected);

    let mut after = board;
    assert!(after.apply_move(result.best_move.unwrap(), true));
    assert_eq!(exhaustive(&after, 3, false, board.to_move), expected);
}

#[test]
fn black_finds_back_rank_mate() {
    let board = Board::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let mut engine = Engine::new(SearchConfig::with_difficulty(2));
    let result = engine.best_move(&board);
    assert_eq!(result.best_move.unwrap().to_string(), "a8a1");
    assert_eq!(result.score, MATE_SCORE + 1);
}

#[test]
fn engine_takes_a_free_queen() {
    let board = Board::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let mut engine = Engine::new(SearchConfig::with_difficulty(2));
    assert_eq!(engine.best_move(&board).best_move.unwrap().to_string(), "e4d5");
}

#[test]
fn engine_returns_none_without_legal_moves() {
    let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut engine = Engine::new(SearchConfig::with_difficulty(3));
    let result = engine.best_move(&stalemate);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn random_games_only_play_legal_moves() {
    let mut white = Engine::new(SearchConfig::with_difficulty(1).seed(1));
    let mut black = Engine::new(SearchConfig::with_difficulty(1).seed(2));
    let mut game = Game::new();

    for _ in 0..200 {
        if game.outcome().is_some() {
            break;
        }
        let engine = match game.board().to_move {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let mv = engine.best_move(game.board()).best_move.unwrap();
        assert!(game.legal_moves().contains(&mv));
        game.play(mv).unwrap();
    }
    assert!(!game.history().is_empty());
}

#[test]
fn searching_engines_play_a_short_game() {
    let mut game = Game::new();
    let mut engine = Engine::new(SearchConfig::with_difficulty(2));
    for _ in 0..6 {
        let before = *game.board();
        let result = engine.best_move(game.board());
        assert_eq!(*game.board(), before);
        assert!(result.nodes_searched > 0);
        game.play(result.best_move.unwrap()).unwrap();
    }
    assert_eq!(game.history().len(), 6);
}
