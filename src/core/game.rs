// Ficheiro: src/core/game.rs
// Descrição: Partida autoritativa: o tabuleiro atual e o histórico de lances.

use super::board::Board;
use super::types::{GameOutcome, Move};
use crate::error::{GameError, GameResult};
use crate::notation;

/// Uma partida em curso. Só os lances efetivamente jogados alteram `board`.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Game { board: Board::new(), history: Vec::new() }
    }

    /// Começa uma partida a partir de uma posição arbitrária.
    pub fn from_board(board: Board) -> Self {
        Game { board, history: Vec::new() }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.generate_legal_moves()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.board.outcome()
    }

    /// Joga um lance, verificando a legalidade. O tabuleiro não muda em caso de erro.
    pub fn play(&mut self, mv: Move) -> GameResult<Move> {
        if let Some(outcome) = self.board.outcome() {
            return Err(GameError::GameOver(outcome));
        }
        // O lance gerado traz as flags corretas (roque, en passant)
        let legal = self
            .board
            .generate_legal_moves()
            .into_iter()
            .find(|candidate| *candidate == mv)
            .ok_or(GameError::IllegalMove(mv))?;

        if !self.board.apply_move(legal, false) {
            return Err(GameError::IllegalMove(mv));
        }
        self.history.push(legal);
        Ok(legal)
    }

    /// Joga um lance escrito em notação de coordenadas ("e2e4", "e7e8q").
    pub fn play_text(&mut self, text: &str) -> GameResult<Move> {
        let mv = notation::find_legal_move(&self.board, text)?;
        self.play(mv)
    }
}
