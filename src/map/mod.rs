//! Map model: territories, adjacency, coastlines, supply centers.
//!
//! A [`Map`] is built once per game variant and is read-only afterwards. All
//! reachability questions the validator and resolver ask (can this army move
//! there, can this fleet move there and on which coast, could a convoy
//! conceivably carry this army there) are answered here.

mod standard;
mod territory;

use std::collections::HashMap;

pub use territory::{Coast, NamedCoast, Nation, Terrain, Territory, TerritoryId, ALL_NATIONS};

/// An immutable game map.
pub struct Map {
    territories: Vec<Territory>,
    by_abbr: HashMap<&'static str, TerritoryId>,
}

impl Map {
    /// The standard 75-territory map.
    pub fn standard() -> Map {
        standard::build()
    }

    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    #[inline]
    pub fn territory(&self, id: TerritoryId) -> &Territory {
        &self.territories[id.index()]
    }

    /// Looks a territory up by its three-letter abbreviation.
    pub fn find(&self, abbr: &str) -> Option<TerritoryId> {
        self.by_abbr.get(abbr).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = TerritoryId> + '_ {
        (0..self.territories.len()).map(|i| TerritoryId(i as u16))
    }

    pub fn territories(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId(i as u16), t))
    }

    /// Whether an army may move directly from `from` to `to`.
    pub fn army_can_reach(&self, from: TerritoryId, to: TerritoryId) -> bool {
        let tf = self.territory(from);
        let tt = self.territory(to);
        tf.terrain != Terrain::Sea
            && tt.terrain != Terrain::Sea
            && tf.neighbours.contains(&to)
    }

    /// Whether a convoy from `from` to `to` is conceivable at all: both ends
    /// must be coastal. Whether fleets are actually in place is the convoy
    /// path finder's question, not the map's.
    pub fn convoy_conceivable(&self, from: TerritoryId, to: TerritoryId) -> bool {
        from != to
            && self.territory(from).terrain == Terrain::Coastal
            && self.territory(to).terrain == Terrain::Coastal
    }

    /// Whether a fleet may move directly from `from` (on `from_coast`, if the
    /// territory is complex) to `to`, arriving on `to_coast` if `to` is
    /// complex. A move into a complex territory without a coast never
    /// succeeds here; the validator reports that case separately.
    pub fn fleet_can_reach(
        &self,
        from: TerritoryId,
        from_coast: Option<Coast>,
        to: TerritoryId,
        to_coast: Option<Coast>,
    ) -> bool {
        let tf = self.territory(from);
        let tt = self.territory(to);
        if tf.terrain == Terrain::Inland || tt.terrain == Terrain::Inland {
            return false;
        }

        if tf.is_complex() {
            // Departure is restricted to the occupied coast's neighbour set.
            let reachable = from_coast
                .and_then(|c| tf.named_coast(c))
                .is_some_and(|nc| nc.neighbours.contains(&to));
            if !reachable {
                return false;
            }
        } else if !tf.neighbours.contains(&to) {
            return false;
        } else if tf.terrain == Terrain::Coastal
            && tt.terrain == Terrain::Coastal
            && !tt.is_complex()
            && !tf.shared_coasts.contains(&to)
        {
            // Two simple coastal territories must share a coastline.
            return false;
        }

        if tt.is_complex() {
            return to_coast
                .and_then(|c| tt.named_coast(c))
                .is_some_and(|nc| nc.neighbours.contains(&from));
        }
        true
    }

    /// The named coasts of `to` a fleet at `from` could arrive on. Empty when
    /// `to` is not complex or is out of reach.
    pub fn fleet_coasts_to(
        &self,
        from: TerritoryId,
        from_coast: Option<Coast>,
        to: TerritoryId,
    ) -> Vec<Coast> {
        self.territory(to)
            .named_coasts
            .iter()
            .filter(|nc| self.fleet_can_reach(from, from_coast, to, Some(nc.coast)))
            .map(|nc| nc.coast)
            .collect()
    }

    /// Whether a fleet at `from` can reach the territory `to` on some coast,
    /// ignoring which. This is the reachability question for supports, which
    /// never name a coast.
    pub fn fleet_can_reach_some_coast(
        &self,
        from: TerritoryId,
        from_coast: Option<Coast>,
        to: TerritoryId,
    ) -> bool {
        if self.territory(to).is_complex() {
            !self.fleet_coasts_to(from, from_coast, to).is_empty()
        } else {
            self.fleet_can_reach(from, from_coast, to, None)
        }
    }
}

/// Incremental map construction. Territories are declared first; adjacency,
/// shared coastlines, and named coasts refer back to them by abbreviation.
pub struct MapBuilder {
    territories: Vec<Territory>,
    by_abbr: HashMap<&'static str, TerritoryId>,
}

impl MapBuilder {
    pub fn new() -> MapBuilder {
        MapBuilder {
            territories: Vec::new(),
            by_abbr: HashMap::new(),
        }
    }

    pub fn territory(&mut self, abbr: &'static str, name: &'static str, terrain: Terrain) {
        self.center(abbr, name, terrain, false, None);
    }

    pub fn center(
        &mut self,
        abbr: &'static str,
        name: &'static str,
        terrain: Terrain,
        supply_center: bool,
        home_nation: Option<Nation>,
    ) {
        let id = TerritoryId(self.territories.len() as u16);
        let prev = self.by_abbr.insert(abbr, id);
        debug_assert!(prev.is_none(), "duplicate territory {abbr}");
        self.territories.push(Territory {
            abbr,
            name,
            terrain,
            neighbours: Vec::new(),
            shared_coasts: Vec::new(),
            named_coasts: Vec::new(),
            supply_center,
            home_nation,
        });
    }

    pub fn neighbours(&mut self, abbr: &str, to: &[&str]) {
        let ids = self.resolve(to);
        let id = self.id(abbr);
        self.territories[id.index()].neighbours = ids;
    }

    pub fn shared_coasts(&mut self, abbr: &str, to: &[&str]) {
        let ids = self.resolve(to);
        let id = self.id(abbr);
        self.territories[id.index()].shared_coasts = ids;
    }

    pub fn named_coast(&mut self, abbr: &str, coast: Coast, to: &[&str]) {
        let ids = self.resolve(to);
        let id = self.id(abbr);
        self.territories[id.index()]
            .named_coasts
            .push(NamedCoast {
                coast,
                neighbours: ids,
            });
    }

    pub fn build(self) -> Map {
        let map = Map {
            territories: self.territories,
            by_abbr: self.by_abbr,
        };
        debug_assert!(map_is_symmetric(&map));
        map
    }

    fn id(&self, abbr: &str) -> TerritoryId {
        match self.by_abbr.get(abbr) {
            Some(id) => *id,
            None => panic!("unknown territory {abbr}"),
        }
    }

    fn resolve(&self, abbrs: &[&str]) -> Vec<TerritoryId> {
        abbrs.iter().map(|a| self.id(a)).collect()
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        MapBuilder::new()
    }
}

fn map_is_symmetric(map: &Map) -> bool {
    map.territories().all(|(id, t)| {
        t.neighbours
            .iter()
            .all(|n| map.territory(*n).neighbours.contains(&id))
            && t.shared_coasts
                .iter()
                .all(|n| map.territory(*n).shared_coasts.contains(&id))
    })
}
