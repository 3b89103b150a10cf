//! Board snapshot: piece positions, supply-center ownership, turn metadata.

mod piece;
mod snapshot;

pub use piece::{Piece, PieceKind};
pub use snapshot::{Board, Season, TurnPhase};
