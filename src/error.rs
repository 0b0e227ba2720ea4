//! Tipos de erro do motor.
//!
//! Nenhum destes erros é fatal: representam entrada inválida (FEN ou texto
//! de lance) ou um pedido de lance ilegal, e o chamador decide o que fazer.

use crate::core::{GameOutcome, Move};
use thiserror::Error;

/// Erros ao carregar uma posição FEN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("Invalid FEN: expected 4 or 6 fields, found {0}")]
    WrongFieldCount(usize),

    #[error("Invalid FEN: expected 8 ranks, found {0}")]
    WrongRankCount(usize),

    #[error("Invalid FEN: rank {rank} does not describe 8 squares")]
    BadRankLength { rank: usize },

    #[error("Invalid piece: {0}")]
    InvalidPiece(char),

    #[error("Invalid turn: {0}")]
    InvalidTurn(String),

    #[error("Invalid castling: {0}")]
    InvalidCastling(String),

    #[error("Invalid en passant square: {0}")]
    InvalidEnPassant(String),

    #[error("Invalid move counter: {0}")]
    InvalidCounter(String),
}

/// Erros ao interpretar um lance em notação de coordenadas ("e2e4", "e7e8q").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("move text must have 4 or 5 characters, got {0:?}")]
    WrongLength(String),

    #[error("square out of range: {0:?}")]
    InvalidSquare(String),

    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(char),

    #[error("no legal move found for {0:?}")]
    NoLegalMove(String),
}

/// Erros ao jogar numa partida.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("game is already over: {0}")]
    GameOver(GameOutcome),

    #[error(transparent)]
    Notation(#[from] NotationError),
}

pub type GameResult<T> = Result<T, GameError>;
