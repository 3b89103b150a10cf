//! Decision arena primitives.
//!
//! Each legal order contributes up to three binary decisions (move success,
//! support given, convoy path found). Strength values are derived on demand
//! as `[min, max]` bounds over whatever is resolved so far, so they need no
//! stored state of their own.

/// Resolution state of a binary decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecisionState {
    Unresolved,
    Guessing,
    Resolved,
}

/// Identity of a binary decision; the payload is the order's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DecisionId {
    Move(usize),
    Support(usize),
    Path(usize),
}

/// Arena slot for one binary decision.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Binary {
    pub state: DecisionState,
    pub value: bool,
    /// Set by a backup rule; a forced resolution survives cycle resets.
    pub forced: bool,
}

impl Binary {
    pub fn unresolved() -> Binary {
        Binary {
            state: DecisionState::Unresolved,
            value: false,
            forced: false,
        }
    }

    pub fn resolved(value: bool) -> Binary {
        Binary {
            state: DecisionState::Resolved,
            value,
            forced: false,
        }
    }
}

/// A strength observed as a closed interval. Collapses to a point once every
/// contributing decision is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bound {
    pub min: i32,
    pub max: i32,
}

impl Bound {
    pub fn new(min: i32, max: i32) -> Bound {
        debug_assert!(min <= max);
        Bound { min, max }
    }

    pub fn point(value: i32) -> Bound {
        Bound {
            min: value,
            max: value,
        }
    }

    pub fn settled(&self) -> bool {
        self.min == self.max
    }

    /// Whether `other` is at least as narrow, for monotonicity checks.
    pub fn contains(&self, other: Bound) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

/// Three-valued observation of a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trit {
    Yes,
    No,
    Maybe,
}

impl Binary {
    /// Observation without recursion: anything not resolved reads as Maybe.
    pub fn observe(&self) -> Trit {
        match self.state {
            DecisionState::Resolved => {
                if self.value {
                    Trit::Yes
                } else {
                    Trit::No
                }
            }
            _ => Trit::Maybe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_narrowing() {
        let wide = Bound::new(0, 3);
        let narrow = Bound::new(1, 2);
        assert!(wide.contains(narrow));
        assert!(!narrow.contains(wide));
        assert!(!wide.settled());
        assert!(Bound::point(2).settled());
    }

    #[test]
    fn observation() {
        assert_eq!(Binary::unresolved().observe(), Trit::Maybe);
        assert_eq!(Binary::resolved(true).observe(), Trit::Yes);
        assert_eq!(Binary::resolved(false).observe(), Trit::No);
    }
}
