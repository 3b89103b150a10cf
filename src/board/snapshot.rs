use serde::{Deserialize, Serialize};

use crate::map::{Coast, Map, Nation, TerritoryId};

use super::{Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Fall,
}

/// Which kind of orders the next adjudication expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Movement,
    Retreat,
    Build,
}

/// A full board snapshot for one turn.
///
/// Snapshots are plain values: adjudication takes one by reference and
/// returns a brand-new one, so a caller can keep every turn's state around.
/// Supply-center ownership is tracked per territory and updated by the
/// caller's lifecycle layer, not by the adjudicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub year: u16,
    pub season: Season,
    pub phase: TurnPhase,
    pub pieces: Vec<Piece>,
    /// Owner of each territory's supply center, indexed by territory.
    /// `None` for unowned centers and for territories without one.
    pub center_owners: Vec<Option<Nation>>,
}

impl Board {
    /// An empty board sized for `map`.
    pub fn empty(map: &Map, year: u16, season: Season, phase: TurnPhase) -> Board {
        Board {
            year,
            season,
            phase,
            pieces: Vec::new(),
            center_owners: vec![None; map.territory_count()],
        }
    }

    /// Places a piece, refusing a territory that already holds a
    /// non-dislodged piece. Returns whether the piece was placed.
    pub fn place(
        &mut self,
        nation: Nation,
        kind: PieceKind,
        territory: TerritoryId,
        coast: Option<Coast>,
    ) -> bool {
        if self.piece_at(territory).is_some() {
            return false;
        }
        let mut piece = Piece::new(nation, kind, territory);
        piece.coast = coast;
        self.pieces.push(piece);
        true
    }

    /// The non-dislodged occupant of a territory, if any.
    pub fn piece_at(&self, territory: TerritoryId) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.territory == territory && !p.dislodged)
    }

    /// The dislodged piece sitting in a territory, if any.
    pub fn dislodged_at(&self, territory: TerritoryId) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.territory == territory && p.dislodged)
    }

    pub fn center_owner(&self, territory: TerritoryId) -> Option<Nation> {
        self.center_owners.get(territory.index()).copied().flatten()
    }

    pub fn set_center_owner(&mut self, territory: TerritoryId, owner: Option<Nation>) {
        self.center_owners[territory.index()] = owner;
    }

    /// Number of non-dislodged pieces a nation has on the board.
    pub fn piece_count(&self, nation: Nation) -> usize {
        self.pieces
            .iter()
            .filter(|p| p.nation == nation && !p.dislodged)
            .count()
    }

    /// Number of supply centers a nation owns.
    pub fn center_count(&self, nation: Nation) -> usize {
        self.center_owners
            .iter()
            .filter(|o| **o == Some(nation))
            .count()
    }
}
