//! Structural order legality.
//!
//! Legality is decided before resolution and independent of how other orders
//! resolve, with one exception: a support is only legal if the order it names
//! exists and could itself reach the named target, so supports are checked in
//! a second pass once every base order has been classified.
//!
//! An illegal Move/Support/Convoy leaves its piece holding for strength
//! purposes; the resolver checks `Validation::legal` before building
//! decisions for an order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, PieceKind, TurnPhase};
use crate::map::{Map, Terrain, TerritoryId};
use crate::order::{Order, OrderKind};

/// Why an order was rejected. `Display` gives the player-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IllegalReason {
    #[error("no friendly piece at the order's source")]
    NoFriendlyPiece,
    #[error("order is not valid in this phase")]
    WrongPhase,
    #[error("piece already has an order")]
    DuplicateOrder,
    #[error("a piece cannot move to its own territory")]
    MoveToSelf,
    #[error("target is not reachable by this piece")]
    UnreachableTarget,
    #[error("must specify a named coast")]
    MustSpecifyNamedCoast,
    #[error("only armies can travel by convoy")]
    FleetCannotBeConvoyed,
    #[error("supporting piece cannot reach the supported target")]
    SupportTargetUnreachable,
    #[error("no order exists for the supported territory")]
    SupportedOrderMissing,
    #[error("supported order does not match the support")]
    SupportedOrderMismatch,
    #[error("supported piece cannot legally make that move")]
    SupportedMoveIllegal,
    #[error("supported piece was ordered to move")]
    SupportedPieceMoving,
    #[error("convoying piece must be a fleet at sea")]
    ConvoyerNotAtSea,
    #[error("convoyed piece must be an army on a coast")]
    ConvoyedPieceNotArmy,
    #[error("piece is not dislodged")]
    NotDislodged,
    #[error("a piece may not retreat toward its attacker")]
    RetreatIntoAttacker,
    #[error("retreat target is occupied")]
    RetreatTargetOccupied,
    #[error("build territory is not a home supply center")]
    NotHomeSupplyCenter,
    #[error("home supply center is not currently owned")]
    HomeCenterNotOwned,
    #[error("build territory is occupied")]
    BuildTerritoryOccupied,
    #[error("a fleet cannot be built there")]
    FleetBuiltInland,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Validation {
    pub legal: bool,
    pub reason: Option<IllegalReason>,
}

impl Validation {
    fn ok() -> Validation {
        Validation {
            legal: true,
            reason: None,
        }
    }

    fn illegal(reason: IllegalReason) -> Validation {
        Validation {
            legal: false,
            reason: Some(reason),
        }
    }
}

pub(crate) fn validate_orders(map: &Map, board: &Board, orders: &[Order]) -> Vec<Validation> {
    let mut out: Vec<Validation> = (0..orders.len())
        .map(|i| validate_base(map, board, orders, i))
        .collect();

    // Supports need the aux order's base legality.
    for i in 0..orders.len() {
        if !out[i].legal {
            continue;
        }
        if let OrderKind::Support { aux, target } = orders[i].kind {
            if let Some(reason) = check_supported_order(board, orders, &out, aux, target) {
                out[i] = Validation::illegal(reason);
            }
        }
    }
    out
}

fn validate_base(map: &Map, board: &Board, orders: &[Order], i: usize) -> Validation {
    let order = &orders[i];

    if !phase_allows(board.phase, &order.kind) {
        return Validation::illegal(IllegalReason::WrongPhase);
    }
    let duplicate = orders[..i]
        .iter()
        .any(|o| o.source == order.source && o.nation == order.nation);
    if duplicate {
        return Validation::illegal(IllegalReason::DuplicateOrder);
    }

    match order.kind {
        OrderKind::Hold => require_piece(board, order).map_or_else(Validation::illegal, |_| Validation::ok()),
        OrderKind::Move {
            target,
            coast,
            via_convoy,
        } => match require_piece(board, order) {
            Err(reason) => Validation::illegal(reason),
            Ok((kind, src_coast)) => validate_move(map, order, kind, src_coast, target, coast, via_convoy),
        },
        OrderKind::Support { target, .. } => match require_piece(board, order) {
            Err(reason) => Validation::illegal(reason),
            Ok((kind, src_coast)) => {
                let reachable = match kind {
                    PieceKind::Army => map.army_can_reach(order.source, target),
                    PieceKind::Fleet => {
                        map.fleet_can_reach_some_coast(order.source, src_coast, target)
                    }
                };
                if reachable {
                    Validation::ok()
                } else {
                    Validation::illegal(IllegalReason::SupportTargetUnreachable)
                }
            }
        },
        OrderKind::Convoy { aux, target } => match require_piece(board, order) {
            Err(reason) => Validation::illegal(reason),
            Ok((kind, _)) => {
                if kind != PieceKind::Fleet || map.territory(order.source).terrain != Terrain::Sea
                {
                    return Validation::illegal(IllegalReason::ConvoyerNotAtSea);
                }
                let army = board
                    .piece_at(aux)
                    .is_some_and(|p| p.kind == PieceKind::Army);
                if !army || !map.convoy_conceivable(aux, target) {
                    return Validation::illegal(IllegalReason::ConvoyedPieceNotArmy);
                }
                Validation::ok()
            }
        },
        OrderKind::Retreat { target, coast } => validate_retreat(map, board, order, target, coast),
        OrderKind::Build { kind, coast } => validate_build(map, board, order, kind, coast),
        OrderKind::Disband => match board.phase {
            TurnPhase::Retreat => {
                let dislodged = board
                    .dislodged_at(order.source)
                    .is_some_and(|p| p.nation == order.nation);
                if dislodged {
                    Validation::ok()
                } else {
                    Validation::illegal(IllegalReason::NotDislodged)
                }
            }
            _ => require_piece(board, order)
                .map_or_else(Validation::illegal, |_| Validation::ok()),
        },
    }
}

fn validate_move(
    map: &Map,
    order: &Order,
    kind: PieceKind,
    src_coast: Option<crate::map::Coast>,
    target: TerritoryId,
    coast: Option<crate::map::Coast>,
    via_convoy: bool,
) -> Validation {
    if target == order.source {
        return Validation::illegal(IllegalReason::MoveToSelf);
    }
    match kind {
        PieceKind::Army => {
            if map.army_can_reach(order.source, target) || map.convoy_conceivable(order.source, target)
            {
                Validation::ok()
            } else {
                Validation::illegal(IllegalReason::UnreachableTarget)
            }
        }
        PieceKind::Fleet => {
            if via_convoy {
                return Validation::illegal(IllegalReason::FleetCannotBeConvoyed);
            }
            if map.territory(target).is_complex() && coast.is_none() {
                return if map.fleet_coasts_to(order.source, src_coast, target).is_empty() {
                    Validation::illegal(IllegalReason::UnreachableTarget)
                } else {
                    Validation::illegal(IllegalReason::MustSpecifyNamedCoast)
                };
            }
            if map.fleet_can_reach(order.source, src_coast, target, coast) {
                Validation::ok()
            } else {
                Validation::illegal(IllegalReason::UnreachableTarget)
            }
        }
    }
}

fn validate_retreat(
    map: &Map,
    board: &Board,
    order: &Order,
    target: TerritoryId,
    coast: Option<crate::map::Coast>,
) -> Validation {
    let Some(piece) = board
        .dislodged_at(order.source)
        .filter(|p| p.nation == order.nation)
        .copied()
    else {
        return Validation::illegal(IllegalReason::NotDislodged);
    };
    if piece.forbidden_retreat == Some(target) {
        return Validation::illegal(IllegalReason::RetreatIntoAttacker);
    }
    if board.piece_at(target).is_some() {
        return Validation::illegal(IllegalReason::RetreatTargetOccupied);
    }
    let reachable = match piece.kind {
        PieceKind::Army => map.army_can_reach(order.source, target),
        PieceKind::Fleet => {
            if map.territory(target).is_complex() && coast.is_none() {
                return if map
                    .fleet_coasts_to(order.source, piece.coast, target)
                    .is_empty()
                {
                    Validation::illegal(IllegalReason::UnreachableTarget)
                } else {
                    Validation::illegal(IllegalReason::MustSpecifyNamedCoast)
                };
            }
            map.fleet_can_reach(order.source, piece.coast, target, coast)
        }
    };
    if reachable {
        Validation::ok()
    } else {
        Validation::illegal(IllegalReason::UnreachableTarget)
    }
}

fn validate_build(
    map: &Map,
    board: &Board,
    order: &Order,
    kind: PieceKind,
    coast: Option<crate::map::Coast>,
) -> Validation {
    let territory = map.territory(order.source);
    if !territory.supply_center || territory.home_nation != Some(order.nation) {
        return Validation::illegal(IllegalReason::NotHomeSupplyCenter);
    }
    if board.center_owner(order.source) != Some(order.nation) {
        return Validation::illegal(IllegalReason::HomeCenterNotOwned);
    }
    if board.piece_at(order.source).is_some() {
        return Validation::illegal(IllegalReason::BuildTerritoryOccupied);
    }
    if kind == PieceKind::Fleet {
        if territory.terrain != Terrain::Coastal {
            return Validation::illegal(IllegalReason::FleetBuiltInland);
        }
        if territory.is_complex() {
            let valid_coast = coast.is_some_and(|c| territory.named_coast(c).is_some());
            if !valid_coast {
                return Validation::illegal(IllegalReason::MustSpecifyNamedCoast);
            }
        }
    }
    Validation::ok()
}

/// The supported order must exist and fit the support. Returns the reason to
/// reject the support, if any.
fn check_supported_order(
    board: &Board,
    orders: &[Order],
    base: &[Validation],
    aux: TerritoryId,
    target: TerritoryId,
) -> Option<IllegalReason> {
    let Some(nation) = board.piece_at(aux).map(|p| p.nation) else {
        return Some(IllegalReason::SupportedOrderMissing);
    };
    let Some(aux_idx) = orders
        .iter()
        .position(|o| o.source == aux && o.nation == nation)
    else {
        return Some(IllegalReason::SupportedOrderMissing);
    };
    let aux_order = &orders[aux_idx];

    if target == aux {
        // Support-hold: void if the piece was legally ordered away.
        if aux_order.is_move() && base[aux_idx].legal {
            return Some(IllegalReason::SupportedPieceMoving);
        }
        return None;
    }
    match aux_order.kind {
        OrderKind::Move { target: t, .. } if t == target => {
            if base[aux_idx].legal {
                None
            } else {
                Some(IllegalReason::SupportedMoveIllegal)
            }
        }
        _ => Some(IllegalReason::SupportedOrderMismatch),
    }
}

fn phase_allows(phase: TurnPhase, kind: &OrderKind) -> bool {
    match kind {
        OrderKind::Hold | OrderKind::Move { .. } | OrderKind::Support { .. } | OrderKind::Convoy { .. } => {
            phase == TurnPhase::Movement
        }
        OrderKind::Retreat { .. } => phase == TurnPhase::Retreat,
        OrderKind::Build { .. } => phase == TurnPhase::Build,
        OrderKind::Disband => phase != TurnPhase::Movement,
    }
}

/// The piece a movement-phase order commands, or why there is none.
fn require_piece(
    board: &Board,
    order: &Order,
) -> Result<(PieceKind, Option<crate::map::Coast>), IllegalReason> {
    board
        .piece_at(order.source)
        .filter(|p| p.nation == order.nation)
        .map(|p| (p.kind, p.coast))
        .ok_or(IllegalReason::NoFriendlyPiece)
}
