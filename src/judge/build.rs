//! Build-phase adjudication.
//!
//! A nation may build one piece per owned home supply center up to its
//! supply-center surplus; builds beyond the allowance fail in submission
//! order. Disbands of existing pieces always resolve. Forced removals for a
//! deficit are the caller's lifecycle concern.

use std::collections::HashMap;

use crate::board::Board;
use crate::map::{Map, Nation};
use crate::order::{Order, OrderKind};

use super::validate;
use super::{OrderReport, Outcome};

pub(crate) fn adjudicate_builds(
    map: &Map,
    board: &Board,
    orders: &[Order],
) -> (Vec<OrderReport>, Board) {
    let validated = validate::validate_orders(map, board, orders);

    let mut allowance: HashMap<Nation, i32> = HashMap::new();
    for order in orders {
        allowance.entry(order.nation).or_insert_with(|| {
            board.center_count(order.nation) as i32 - board.piece_count(order.nation) as i32
        });
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
            OrderKind::Build { kind, coast } => {
                let budget = allowance.entry(order.nation).or_insert(0);
                if *budget > 0 && next.place(order.nation, kind, order.source, coast) {
                    *budget -= 1;
                    Outcome::Succeeds
                } else {
                    Outcome::Fails
                }
            }
            OrderKind::Disband => {
                let at = next
                    .pieces
                    .iter()
                    .position(|p| p.territory == order.source && p.nation == order.nation && !p.dislodged);
                match at {
                    Some(idx) => {
                        next.pieces.remove(idx);
                        Outcome::Succeeds
                    }
                    None => Outcome::Fails,
                }
            }
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
    (reports, next)
}
