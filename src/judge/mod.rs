//! Order adjudication.
//!
//! [`adjudicate`] resolves one turn's orders against a board snapshot and
//! returns a report per submitted order plus the next snapshot. Dispatch is
//! by the snapshot's phase: movement orders go through the full decision
//! resolver, retreat and build orders through their simpler phase rules.

mod build;
mod convoy;
mod decision;
mod outcome;
mod resolve;
mod retreat;
mod validate;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, TurnPhase};
use crate::map::{Map, TerritoryId};
use crate::order::Order;

pub use validate::IllegalReason;

/// Fatal resolution failure. Indicates an engine bug or an adversarial order
/// set the backup rules could not break; never a player input problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JudgeError {
    #[error("order resolution stuck after {backups} backup-rule applications")]
    ResolutionStuck { backups: usize },
    #[error("order resolution exceeded its iteration budget")]
    BudgetExceeded,
}

/// How an order fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Succeeds,
    Fails,
    /// The order never entered resolution (it was illegal).
    NotApplicable,
}

/// Per-order adjudication result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReport {
    pub order: Order,
    pub legal: bool,
    pub reason: Option<IllegalReason>,
    pub outcome: Outcome,
    /// If the order's piece was dislodged: the territory the attack came from.
    pub dislodged_by: Option<TerritoryId>,
}

/// The result of adjudicating one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjudication {
    /// One report per submitted order, in submission order.
    pub reports: Vec<OrderReport>,
    /// The board after applying every outcome. The input board is untouched.
    pub board: Board,
}

/// Adjudicates one turn's orders.
///
/// Movement-phase pieces without a submitted order hold implicitly; implicit
/// holds influence resolution but produce no report.
pub fn adjudicate(map: &Map, board: &Board, orders: &[Order]) -> Result<Adjudication, JudgeError> {
    match board.phase {
        TurnPhase::Movement => movement(map, board, orders),
        TurnPhase::Retreat => {
            let (reports, board) = retreat::adjudicate_retreats(map, board, orders);
            Ok(Adjudication { reports, board })
        }
        TurnPhase::Build => {
            let (reports, board) = build::adjudicate_builds(map, board, orders);
            Ok(Adjudication { reports, board })
        }
    }
}

fn movement(map: &Map, board: &Board, orders: &[Order]) -> Result<Adjudication, JudgeError> {
    let submitted = orders.len();
    let mut all = orders.to_vec();
    for piece in &board.pieces {
        if piece.dislodged {
            continue;
        }
        let has_order = orders
            .iter()
            .any(|o| o.source == piece.territory && o.nation == piece.nation);
        if !has_order {
            all.push(Order::hold(piece.nation, piece.territory));
        }
    }

    let validated = validate::validate_orders(map, board, &all);
    let mut resolver = resolve::Resolver::new(map, board, &all, &validated);
    resolver.run()?;
    let (reports, board) = outcome::apply_movement(map, board, &all, &validated, &resolver, submitted);
    Ok(Adjudication { reports, board })
}
