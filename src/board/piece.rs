use serde::{Deserialize, Serialize};

use crate::map::{Coast, Nation, TerritoryId};

/// Army or fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Army,
    Fleet,
}

/// A piece on the board.
///
/// `dislodged` and `forbidden_retreat` carry movement-phase results into the
/// retreat phase: a dislodged piece stays on its territory, flagged, until it
/// retreats or disbands, and may not retreat into the territory its attacker
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub nation: Nation,
    pub kind: PieceKind,
    pub territory: TerritoryId,
    /// Which named coast a fleet sits on, for complex territories only.
    pub coast: Option<Coast>,
    pub dislodged: bool,
    /// The territory the dislodging attack came from.
    pub forbidden_retreat: Option<TerritoryId>,
}

impl Piece {
    pub fn new(nation: Nation, kind: PieceKind, territory: TerritoryId) -> Piece {
        Piece {
            nation,
            kind,
            territory,
            coast: None,
            dislodged: false,
            forbidden_retreat: None,
        }
    }

    pub fn on_coast(mut self, coast: Coast) -> Piece {
        self.coast = Some(coast);
        self
    }
}
