//! Player orders.
//!
//! Every order carries the issuing nation and the territory of the piece it
//! commands; the kind-specific payload lives in the closed [`OrderKind`]
//! union. A support whose target equals its aux territory is a support-hold.

use serde::{Deserialize, Serialize};

use crate::board::PieceKind;
use crate::map::{Coast, Nation, TerritoryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub nation: Nation,
    /// Territory of the piece being ordered (or built).
    pub source: TerritoryId,
    pub kind: OrderKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Hold,
    Move {
        target: TerritoryId,
        /// Arrival coast, required when the target has named coasts.
        coast: Option<Coast>,
        /// The army asks to travel by convoy even where a land route exists.
        via_convoy: bool,
    },
    /// Support the order of the piece at `aux` toward `target`.
    /// `target == aux` supports that piece holding in place.
    Support {
        aux: TerritoryId,
        target: TerritoryId,
    },
    /// Convoy the army at `aux` to `target`.
    Convoy {
        aux: TerritoryId,
        target: TerritoryId,
    },
    Retreat {
        target: TerritoryId,
        coast: Option<Coast>,
    },
    Build {
        kind: PieceKind,
        coast: Option<Coast>,
    },
    Disband,
}

impl Order {
    pub fn hold(nation: Nation, source: TerritoryId) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Hold,
        }
    }

    pub fn move_to(nation: Nation, source: TerritoryId, target: TerritoryId) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Move {
                target,
                coast: None,
                via_convoy: false,
            },
        }
    }

    pub fn move_to_coast(
        nation: Nation,
        source: TerritoryId,
        target: TerritoryId,
        coast: Coast,
    ) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Move {
                target,
                coast: Some(coast),
                via_convoy: false,
            },
        }
    }

    pub fn convoyed_move(nation: Nation, source: TerritoryId, target: TerritoryId) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Move {
                target,
                coast: None,
                via_convoy: true,
            },
        }
    }

    pub fn support_hold(nation: Nation, source: TerritoryId, aux: TerritoryId) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Support { aux, target: aux },
        }
    }

    pub fn support_move(
        nation: Nation,
        source: TerritoryId,
        aux: TerritoryId,
        target: TerritoryId,
    ) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Support { aux, target },
        }
    }

    pub fn convoy(
        nation: Nation,
        source: TerritoryId,
        aux: TerritoryId,
        target: TerritoryId,
    ) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Convoy { aux, target },
        }
    }

    pub fn retreat(nation: Nation, source: TerritoryId, target: TerritoryId) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Retreat {
                target,
                coast: None,
            },
        }
    }

    pub fn retreat_to_coast(
        nation: Nation,
        source: TerritoryId,
        target: TerritoryId,
        coast: Coast,
    ) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Retreat {
                target,
                coast: Some(coast),
            },
        }
    }

    pub fn build(nation: Nation, source: TerritoryId, kind: PieceKind) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Build { kind, coast: None },
        }
    }

    pub fn build_fleet_on_coast(nation: Nation, source: TerritoryId, coast: Coast) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Build {
                kind: PieceKind::Fleet,
                coast: Some(coast),
            },
        }
    }

    pub fn disband(nation: Nation, source: TerritoryId) -> Order {
        Order {
            nation,
            source,
            kind: OrderKind::Disband,
        }
    }

    /// Move target, for move orders.
    pub fn move_target(&self) -> Option<TerritoryId> {
        match self.kind {
            OrderKind::Move { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self.kind, OrderKind::Move { .. })
    }
}
