pub mod board;
pub mod piece;
pub mod state;

pub use board::{Board, Cell};
pub use piece::{Piece, PieceKind};
pub use state::{Game, Phase};
