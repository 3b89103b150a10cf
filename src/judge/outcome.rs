//! Turns final resolutions into order reports and the next board snapshot.

use std::collections::HashMap;

use crate::board::Board;
use crate::map::{Coast, Map, TerritoryId};
use crate::order::{Order, OrderKind};

use super::resolve::Resolver;
use super::validate::Validation;
use super::{OrderReport, Outcome};

/// Builds the movement-phase reports and the successor board. `orders` is
/// the full order list including implicit holds; only the first `submitted`
/// get a report.
pub(crate) fn apply_movement(
    map: &Map,
    board: &Board,
    orders: &[Order],
    validated: &[Validation],
    resolver: &Resolver,
    submitted: usize,
) -> (Vec<OrderReport>, Board) {
    // Successful moves by source territory.
    let mut moved: HashMap<TerritoryId, (TerritoryId, Option<Coast>)> = HashMap::new();
    for (i, order) in orders.iter().enumerate() {
        if !resolver.move_succeeded(i) {
            continue;
        }
        if let OrderKind::Move { target, coast, .. } = order.kind {
            let arrival = if map.territory(target).is_complex() {
                coast
            } else {
                None
            };
            moved.insert(order.source, (target, arrival));
        }
    }

    // Dislodgements by victim territory, valued by the attack's origin.
    let mut dislodged_from: HashMap<TerritoryId, TerritoryId> = HashMap::new();
    for (i, order) in orders.iter().enumerate() {
        if !resolver.move_succeeded(i) {
            continue;
        }
        if let Some(target) = order.move_target() {
            if board.piece_at(target).is_some() && !moved.contains_key(&target) {
                dislodged_from.insert(target, order.source);
            }
        }
    }

    let mut next = board.clone();
    for piece in &mut next.pieces {
        let at = piece.territory;
        if let Some(&(target, coast)) = moved.get(&at) {
            piece.territory = target;
            piece.coast = coast;
        } else if let Some(&from) = dislodged_from.get(&at) {
            piece.dislodged = true;
            piece.forbidden_retreat = Some(from);
        }
    }

    let mut reports = Vec::with_capacity(submitted);
    for (i, order) in orders.iter().take(submitted).enumerate() {
        let v = validated[i];
        let outcome = if !v.legal {
            Outcome::NotApplicable
        } else {
            match order.kind {
                OrderKind::Move { .. } => settled(resolver.move_succeeded(i)),
                OrderKind::Support { .. } => settled(resolver.support_given(i)),
                OrderKind::Convoy { .. } => settled(!dislodged_from.contains_key(&order.source)),
                OrderKind::Hold => Outcome::Succeeds,
                _ => Outcome::NotApplicable,
            }
        };
        reports.push(OrderReport {
            order: *order,
            legal: v.legal,
            reason: v.reason,
            outcome,
            dislodged_by: dislodged_from.get(&order.source).copied(),
        });
    }
    (reports, next)
}

fn settled(succeeded: bool) -> Outcome {
    if succeeded {
        Outcome::Succeeds
    } else {
        Outcome::Fails
    }
}
