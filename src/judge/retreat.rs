//! Retreat-phase adjudication.
//!
//! Two dislodged pieces retreating to the same territory bounce and both
//! disband. Dislodged pieces without a usable order disband as well (civil
//! disorder). Retreats never dislodge anyone: an occupied target was already
//! rejected by validation.

use std::collections::HashMap;

use crate::board::Board;
use crate::map::{Map, TerritoryId};
use crate::order::{Order, OrderKind};

use super::validate;
use super::{OrderReport, Outcome};

pub(crate) fn adjudicate_retreats(
    map: &Map,
    board: &Board,
    orders: &[Order],
) -> (Vec<OrderReport>, Board) {
    let validated = validate::validate_orders(map, board, orders);

    let mut target_count: HashMap<TerritoryId, u32> = HashMap::new();
    for (i, order) in orders.iter().enumerate() {
        if !validated[i].legal {
            continue;
        }
        if let OrderKind::Retreat { target, .. } = order.kind {
            *target_count.entry(target).or_insert(0) += 1;
        }
    }

    let mut next = board.clone();
    let mut reports = Vec::with_capacity(orders.len());
    for (i, order) in orders.iter().enumerate() {
        let v = validated[i];
        if !v.legal {
            reports.push(OrderReport {
                order: *order,
                legal: false,
                reason: v.reason,
                outcome: Outcome::NotApplicable,
                dislodged_by: None,
            });
            continue;
        }
        let outcome = match order.kind {
            OrderKind::Retreat { target, coast } => {
                if target_count.get(&target).copied().unwrap_or(0) > 1 {
                    // Bounced; the piece stays flagged and is swept below.
                    Outcome::Fails
                } else {
                    let arrival = if map.territory(target).is_complex() {
                        coast
                    } else {
                        None
                    };
                    if let Some(piece) = next
                        .pieces
                        .iter_mut()
                        .find(|p| p.dislodged && p.territory == order.source && p.nation == order.nation)
                    {
                        piece.territory = target;
                        piece.coast = arrival;
                        piece.dislodged = false;
                        piece.forbidden_retreat = None;
                    }
                    Outcome::Succeeds
                }
            }
            OrderKind::Disband => Outcome::Succeeds,
            _ => Outcome::NotApplicable,
        };
        reports.push(OrderReport {
            order: *order,
            legal: true,
            reason: None,
            outcome,
            dislodged_by: None,
        });
    }

    // Everything still flagged failed to get away.
    next.pieces.retain(|p| !p.dislodged);
    (reports, next)
}
