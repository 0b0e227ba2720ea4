// Torre - motor de regras de xadrez com adversário Alpha-Beta

pub mod core;
pub mod engine;
pub mod error;
pub mod moves;
pub mod notation;
pub mod search;

pub use self::core::*;
pub use self::error::*;
