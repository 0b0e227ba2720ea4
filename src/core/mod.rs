pub mod board;
pub mod game;
pub mod types;

pub use board::*;
pub use game::*;
pub use types::*;
