//! Territory metadata types.
//!
//! Terrain distinctions collapse into a single `Territory` struct carrying a
//! `Terrain` tag plus optional named coasts; fleet/army reachability branches
//! on the tag rather than on territory subtypes.

use serde::{Deserialize, Serialize};

/// Index of a territory within its [`Map`](crate::map::Map).
///
/// Stable for the lifetime of the map; used as the key for every
/// territory-indexed table in the adjudicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub u16);

impl TerritoryId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of ground a territory is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Land with no coastline; armies only.
    Inland,
    /// Land with a coastline; armies and fleets.
    Coastal,
    /// Open water; fleets only.
    Sea,
}

/// A named coast of a complex coastal territory (e.g. the south coast of
/// Spain). A fleet in such a territory always sits on exactly one coast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coast {
    North,
    South,
    East,
}

impl Coast {
    /// Conventional two-letter label ("nc", "sc", "ec").
    pub fn label(self) -> &'static str {
        match self {
            Coast::North => "nc",
            Coast::South => "sc",
            Coast::East => "ec",
        }
    }
}

/// One of the seven great powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nation {
    Austria,
    England,
    France,
    Germany,
    Italy,
    Russia,
    Turkey,
}

/// All nations, in alphabetical order.
pub const ALL_NATIONS: [Nation; 7] = [
    Nation::Austria,
    Nation::England,
    Nation::France,
    Nation::Germany,
    Nation::Italy,
    Nation::Russia,
    Nation::Turkey,
];

/// A named coast and the territories a fleet positioned on it can reach.
///
/// The neighbour set is a subset of the parent territory's neighbours.
#[derive(Debug, Clone)]
pub struct NamedCoast {
    pub coast: Coast,
    pub neighbours: Vec<TerritoryId>,
}

/// A territory on the map. Immutable once the map is built.
#[derive(Debug, Clone)]
pub struct Territory {
    /// Conventional three-letter abbreviation ("par", "nth", ...).
    pub abbr: &'static str,
    pub name: &'static str,
    pub terrain: Terrain,
    /// Territories adjacent by land or sea, ignoring coastline detail.
    pub neighbours: Vec<TerritoryId>,
    /// Simple coastal neighbours that share a continuous coastline, so a
    /// fleet may move directly between the two.
    pub shared_coasts: Vec<TerritoryId>,
    /// Non-empty only for complex coastal territories (Bulgaria, Spain,
    /// St. Petersburg on the standard map).
    pub named_coasts: Vec<NamedCoast>,
    pub supply_center: bool,
    /// The nation for which this is a home supply center, if any.
    pub home_nation: Option<Nation>,
}

impl Territory {
    /// Whether this territory has named coasts a fleet must pick between.
    #[inline]
    pub fn is_complex(&self) -> bool {
        !self.named_coasts.is_empty()
    }

    pub fn named_coast(&self, coast: Coast) -> Option<&NamedCoast> {
        self.named_coasts.iter().find(|nc| nc.coast == coast)
    }
}
