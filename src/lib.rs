//! Entente adjudication library.
//!
//! Given a map, a board snapshot, and one order per piece, [`judge::adjudicate`]
//! computes the legality and outcome of every order and the resulting board.
//! Resolution covers the fully interdependent cases: support cuts, convoy
//! disruption, head-to-head battles, circular movement, and the convoy
//! paradoxes (broken by the Szykman rule).
//!
//! The engine is a pure function of its inputs. It performs no I/O, holds no
//! global state, and never mutates the snapshot it is given.

pub mod board;
pub mod judge;
pub mod map;
pub mod order;

pub use board::{Board, Piece, PieceKind, Season, TurnPhase};
pub use judge::{adjudicate, Adjudication, IllegalReason, JudgeError, OrderReport, Outcome};
pub use map::{Coast, Map, Nation, Terrain, Territory, TerritoryId};
pub use order::{Order, OrderKind};
