//! Movement-phase resolution.
//!
//! Two tiers. A sweep first evaluates every decision against resolved facts
//! only: strength bounds widen over unresolved dependencies, so anything the
//! sweep settles is settled for good, and the bounds narrow monotonically as
//! passes repeat. Whatever survives the sweep sits on a genuine dependency
//! cycle and goes through the recursive guess-and-check procedure: guess a
//! decision pessimistically, evaluate, track which guesses the evaluation
//! leaned on via an explicit dependency stack, and when a cycle closes on
//! itself flip the guess and compare. Cycles with two consistent resolutions
//! are broken by a backup rule: Szykman (paradoxical convoys get no path)
//! when a convoy is involved, otherwise the circular-movement rule (every
//! move in the ring succeeds).

use crate::board::{Board, PieceKind};
use crate::map::{Map, Nation, TerritoryId};
use crate::order::{Order, OrderKind};

use super::convoy;
use super::decision::{Binary, Bound, DecisionId, DecisionState, Trit};
use super::validate::Validation;
use super::JudgeError;

/// How dependencies are consulted during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Resolved facts only; unresolved dependencies observe as Maybe.
    Observe,
    /// Recurse into dependencies; guesses count as fact.
    Commit,
}

/// Static facts about one legal move order, computed before resolution.
#[derive(Debug, Clone)]
struct MoveFacts {
    target: TerritoryId,
    uses_convoy: bool,
    /// Convoy chains as fleet order indices, travel order.
    routes: Vec<Vec<usize>>,
    /// The opposing order of a head-to-head battle, if any.
    head_to_head: Option<usize>,
    /// Legal supports for this move.
    supports: Vec<usize>,
}

pub(crate) struct Resolver<'a> {
    orders: &'a [Order],
    validated: &'a [Validation],
    /// Order commanding each territory's piece.
    occupant: Vec<Option<usize>>,
    /// Legal moves targeting each territory.
    attackers: Vec<Vec<usize>>,
    /// Legal support-holds for each territory.
    hold_supports: Vec<Vec<usize>>,
    move_facts: Vec<Option<MoveFacts>>,
    move_dec: Vec<Binary>,
    support_dec: Vec<Binary>,
    path_dec: Vec<Binary>,
    dep_stack: Vec<DecisionId>,
    backups: usize,
    failure: Option<JudgeError>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(
        map: &'a Map,
        board: &'a Board,
        orders: &'a [Order],
        validated: &'a [Validation],
    ) -> Resolver<'a> {
        let n = orders.len();
        let tcount = map.territory_count();

        let mut occupant = vec![None; tcount];
        for piece in &board.pieces {
            if piece.dislodged {
                continue;
            }
            let idx = orders
                .iter()
                .position(|o| o.source == piece.territory && o.nation == piece.nation);
            if let Some(i) = idx {
                occupant[piece.territory.index()] = Some(i);
            }
        }

        let legal: Vec<bool> = validated.iter().map(|v| v.legal).collect();

        let mut move_facts: Vec<Option<MoveFacts>> = vec![None; n];
        for i in 0..n {
            if !legal[i] {
                continue;
            }
            let OrderKind::Move {
                target, via_convoy, ..
            } = orders[i].kind
            else {
                continue;
            };
            let src = orders[i].source;
            let is_army = board
                .piece_at(src)
                .is_some_and(|p| p.kind == PieceKind::Army);
            let adjacent = map.army_can_reach(src, target);
            let routes = if is_army && map.convoy_conceivable(src, target) {
                convoy::convoy_routes(map, orders, &legal, src, target)
            } else {
                Vec::new()
            };
            // An army asking for a convoy with no fleet in place falls back
            // to the land route when one exists.
            let uses_convoy = is_army && (!adjacent || (via_convoy && !routes.is_empty()));
            let supports = orders
                .iter()
                .enumerate()
                .filter(|(s, o)| {
                    legal[*s]
                        && matches!(o.kind,
                            OrderKind::Support { aux, target: t } if aux == src && t == target)
                })
                .map(|(s, _)| s)
                .collect();
            move_facts[i] = Some(MoveFacts {
                target,
                uses_convoy,
                routes,
                head_to_head: None,
                supports,
            });
        }

        // Head-to-head: the target's piece moves back at the source and
        // neither leg travels by convoy.
        for i in 0..n {
            let (target, convoyed) = match &move_facts[i] {
                Some(f) => (f.target, f.uses_convoy),
                None => continue,
            };
            if convoyed {
                continue;
            }
            let Some(j) = occupant[target.index()] else {
                continue;
            };
            if j == i {
                continue;
            }
            let back = matches!(&move_facts[j],
                Some(g) if g.target == orders[i].source && !g.uses_convoy);
            if back {
                if let Some(f) = move_facts[i].as_mut() {
                    f.head_to_head = Some(j);
                }
            }
        }

        let mut attackers: Vec<Vec<usize>> = vec![Vec::new(); tcount];
        for (i, f) in move_facts.iter().enumerate() {
            if let Some(f) = f {
                attackers[f.target.index()].push(i);
            }
        }
        let mut hold_supports: Vec<Vec<usize>> = vec![Vec::new(); tcount];
        for (i, o) in orders.iter().enumerate() {
            if !legal[i] {
                continue;
            }
            if let OrderKind::Support { aux, target } = o.kind {
                if aux == target {
                    hold_supports[aux.index()].push(i);
                }
            }
        }

        let mut move_dec = vec![Binary::resolved(false); n];
        let mut support_dec = vec![Binary::resolved(false); n];
        let mut path_dec = vec![Binary::resolved(false); n];
        for i in 0..n {
            match &move_facts[i] {
                Some(f) => {
                    move_dec[i] = Binary::unresolved();
                    path_dec[i] = if !f.uses_convoy {
                        Binary::resolved(true)
                    } else if f.routes.is_empty() {
                        Binary::resolved(false)
                    } else {
                        Binary::unresolved()
                    };
                }
                None => {
                    if legal[i] && matches!(orders[i].kind, OrderKind::Support { .. }) {
                        support_dec[i] = Binary::unresolved();
                    }
                }
            }
        }

        Resolver {
            orders,
            validated,
            occupant,
            attackers,
            hold_supports,
            move_facts,
            move_dec,
            support_dec,
            path_dec,
            dep_stack: Vec::new(),
            backups: 0,
            failure: None,
        }
    }

    /// Resolves every decision or reports why it cannot.
    pub(crate) fn run(&mut self) -> Result<(), JudgeError> {
        self.sweep();
        let mut spins = 0usize;
        let budget = 4 * self.orders.len() + 8;
        while let Some(d) = self.next_unresolved() {
            self.resolve_binary(d);
            if let Some(e) = self.failure.take() {
                return Err(e);
            }
            spins += 1;
            if spins > budget {
                return Err(JudgeError::BudgetExceeded);
            }
        }
        debug_assert!(self.dep_stack.is_empty());
        Ok(())
    }

    pub(crate) fn move_succeeded(&self, i: usize) -> bool {
        self.move_facts[i].is_some() && self.move_dec[i].value
    }

    pub(crate) fn support_given(&self, i: usize) -> bool {
        self.support_dec[i].state == DecisionState::Resolved && self.support_dec[i].value
    }

    #[cfg(test)]
    pub(crate) fn path_found(&self, i: usize) -> bool {
        self.path_dec[i].value
    }

    // --- tier 1: observe-mode sweep ------------------------------------

    fn sweep(&mut self) {
        loop {
            let mut changed = false;
            for i in 0..self.orders.len() {
                for d in [DecisionId::Path(i), DecisionId::Support(i), DecisionId::Move(i)] {
                    if self.slot(d).state != DecisionState::Unresolved {
                        continue;
                    }
                    match self.evaluate(d, Mode::Observe) {
                        Trit::Maybe => {}
                        t => {
                            let s = self.slot_mut(d);
                            s.state = DecisionState::Resolved;
                            s.value = t == Trit::Yes;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }

    fn next_unresolved(&self) -> Option<DecisionId> {
        for i in 0..self.orders.len() {
            for d in [DecisionId::Path(i), DecisionId::Support(i), DecisionId::Move(i)] {
                if self.slot(d).state == DecisionState::Unresolved {
                    return Some(d);
                }
            }
        }
        None
    }

    // --- tier 2: recursive guess-and-check -----------------------------

    fn slot(&self, d: DecisionId) -> Binary {
        match d {
            DecisionId::Move(i) => self.move_dec[i],
            DecisionId::Support(i) => self.support_dec[i],
            DecisionId::Path(i) => self.path_dec[i],
        }
    }

    fn slot_mut(&mut self, d: DecisionId) -> &mut Binary {
        match d {
            DecisionId::Move(i) => &mut self.move_dec[i],
            DecisionId::Support(i) => &mut self.support_dec[i],
            DecisionId::Path(i) => &mut self.path_dec[i],
        }
    }

    fn reset_unless_forced(&mut self, d: DecisionId) {
        let s = self.slot_mut(d);
        if !s.forced {
            s.state = DecisionState::Unresolved;
            s.value = false;
        }
    }

    fn resolve_binary(&mut self, d: DecisionId) -> bool {
        match self.slot(d).state {
            DecisionState::Resolved => return self.slot(d).value,
            DecisionState::Guessing => {
                if !self.dep_stack.contains(&d) {
                    self.dep_stack.push(d);
                }
                return self.slot(d).value;
            }
            DecisionState::Unresolved => {}
        }
        if self.failure.is_some() {
            // A fatal condition is latched; settle arbitrarily so every
            // caller unwinds without spinning.
            let s = self.slot_mut(d);
            s.state = DecisionState::Resolved;
            return s.value;
        }

        let depth = self.dep_stack.len();
        {
            let s = self.slot_mut(d);
            s.state = DecisionState::Guessing;
            s.value = false;
        }
        let first = self.evaluate(d, Mode::Commit) == Trit::Yes;

        if self.dep_stack.len() == depth {
            // Evaluation leaned on no guess: the result is fact. A nested
            // backup may already have resolved this slot.
            let s = self.slot_mut(d);
            if s.state != DecisionState::Resolved {
                s.state = DecisionState::Resolved;
                s.value = first;
            }
            return self.slot(d).value;
        }
        if self.dep_stack[depth] != d {
            // Dependent on a cycle headed elsewhere: keep the tentative
            // result and register on the stack for the head to clean up.
            self.slot_mut(d).value = first;
            self.dep_stack.push(d);
            return first;
        }

        // A cycle closed on this decision. Flip the guess and compare.
        let members: Vec<DecisionId> = self.dep_stack.split_off(depth);
        for &m in &members {
            self.reset_unless_forced(m);
        }
        {
            let s = self.slot_mut(d);
            s.state = DecisionState::Guessing;
            s.value = true;
        }
        let second = self.evaluate(d, Mode::Commit) == Trit::Yes;
        let mut all: Vec<DecisionId> = self.dep_stack.split_off(depth);

        if first == second {
            for &m in &all {
                self.reset_unless_forced(m);
            }
            let s = self.slot_mut(d);
            s.state = DecisionState::Resolved;
            s.value = first;
            return first;
        }

        // Two consistent resolutions (or none): break the cycle.
        for &m in &members {
            if !all.contains(&m) {
                all.push(m);
            }
        }
        self.backup_rule(&all);
        self.resolve_binary(d)
    }

    fn backup_rule(&mut self, members: &[DecisionId]) {
        self.backups += 1;
        if self.backups > self.orders.len() + 1 {
            self.failure = Some(JudgeError::ResolutionStuck {
                backups: self.backups,
            });
            self.force_all(members);
            return;
        }

        let has_convoy = members
            .iter()
            .any(|m| matches!(m, DecisionId::Path(_)));
        if has_convoy {
            // Szykman: the paradoxical convoys have no path; everything else
            // re-resolves from that.
            for &m in members {
                if let DecisionId::Path(i) = m {
                    let s = &mut self.path_dec[i];
                    s.state = DecisionState::Resolved;
                    s.value = false;
                    s.forced = true;
                } else {
                    self.reset_unless_forced(m);
                }
            }
            return;
        }

        // Circular movement: every move in the ring advances.
        let mut any = false;
        for &m in members {
            if let DecisionId::Move(i) = m {
                let s = &mut self.move_dec[i];
                s.state = DecisionState::Resolved;
                s.value = true;
                s.forced = true;
                any = true;
            } else {
                self.reset_unless_forced(m);
            }
        }
        if !any {
            self.failure = Some(JudgeError::ResolutionStuck {
                backups: self.backups,
            });
            self.force_all(members);
        }
    }

    fn force_all(&mut self, members: &[DecisionId]) {
        for &m in members {
            let s = self.slot_mut(m);
            s.state = DecisionState::Resolved;
            s.value = false;
            s.forced = true;
        }
    }

    // --- dependency views ----------------------------------------------

    fn move_status(&mut self, i: usize, mode: Mode) -> Trit {
        match mode {
            Mode::Observe => self.move_dec[i].observe(),
            Mode::Commit => yes_no(self.resolve_binary(DecisionId::Move(i))),
        }
    }

    fn support_status(&mut self, i: usize, mode: Mode) -> Trit {
        match mode {
            Mode::Observe => self.support_dec[i].observe(),
            Mode::Commit => yes_no(self.resolve_binary(DecisionId::Support(i))),
        }
    }

    fn path_status(&mut self, i: usize, mode: Mode) -> Trit {
        match mode {
            Mode::Observe => self.path_dec[i].observe(),
            Mode::Commit => yes_no(self.resolve_binary(DecisionId::Path(i))),
        }
    }

    fn is_legal_move(&self, i: usize) -> bool {
        self.move_facts[i].is_some()
    }

    // --- defining functions --------------------------------------------

    fn evaluate(&mut self, d: DecisionId, mode: Mode) -> Trit {
        match d {
            DecisionId::Move(i) => self.eval_move(i, mode),
            DecisionId::Support(i) => self.eval_support(i, mode),
            DecisionId::Path(i) => self.eval_path(i, mode),
        }
    }

    fn eval_move(&mut self, m: usize, mode: Mode) -> Trit {
        let (target, h2h) = match &self.move_facts[m] {
            Some(f) => (f.target, f.head_to_head),
            None => return Trit::No,
        };
        let attack = self.attack_strength(m, mode);
        let against = match h2h {
            Some(o) => self.defend_strength(o, mode),
            None => self.hold_strength(target, mode),
        };
        let mut undecided = false;
        if attack.max <= against.min {
            return Trit::No;
        }
        if attack.min <= against.max {
            undecided = true;
        }
        let rivals: Vec<usize> = self.attackers[target.index()]
            .iter()
            .copied()
            .filter(|&r| r != m)
            .collect();
        for r in rivals {
            let prevent = self.prevent_strength(r, mode);
            if attack.max <= prevent.min {
                return Trit::No;
            }
            if attack.min <= prevent.max {
                undecided = true;
            }
        }
        if undecided {
            Trit::Maybe
        } else {
            Trit::Yes
        }
    }

    fn eval_support(&mut self, s: usize, mode: Mode) -> Trit {
        let order = self.orders[s];
        let (aux, target) = match order.kind {
            OrderKind::Support { aux, target } => (aux, target),
            _ => return Trit::No,
        };
        // An attack from the territory the supported piece is moving against
        // only cuts by dislodging the supporter.
        let exempt = if target != aux { Some(target) } else { None };
        let against = self.attackers[order.source.index()].clone();
        let mut maybe = false;
        for a in against {
            if self.orders[a].nation == order.nation {
                continue;
            }
            let status = if Some(self.orders[a].source) == exempt {
                self.move_status(a, mode)
            } else {
                self.path_status(a, mode)
            };
            match status {
                Trit::Yes => return Trit::No,
                Trit::Maybe => maybe = true,
                Trit::No => {}
            }
        }
        if maybe {
            Trit::Maybe
        } else {
            Trit::Yes
        }
    }

    fn eval_path(&mut self, m: usize, mode: Mode) -> Trit {
        let routes = match &self.move_facts[m] {
            Some(f) => f.routes.clone(),
            None => return Trit::No,
        };
        let mut maybe = false;
        for route in &routes {
            let mut broken = false;
            let mut unsettled = false;
            for &f in route {
                match self.fleet_safety(f, mode) {
                    Trit::No => {
                        broken = true;
                        break;
                    }
                    Trit::Maybe => unsettled = true,
                    Trit::Yes => {}
                }
            }
            if broken {
                continue;
            }
            if unsettled {
                maybe = true;
            } else {
                return Trit::Yes;
            }
        }
        if maybe {
            Trit::Maybe
        } else {
            Trit::No
        }
    }

    /// Whether a convoying fleet keeps its station (is not dislodged).
    fn fleet_safety(&mut self, f: usize, mode: Mode) -> Trit {
        let against = self.attackers[self.orders[f].source.index()].clone();
        let mut maybe = false;
        for a in against {
            match self.move_status(a, mode) {
                Trit::Yes => return Trit::No,
                Trit::Maybe => maybe = true,
                Trit::No => {}
            }
        }
        if maybe {
            Trit::Maybe
        } else {
            Trit::Yes
        }
    }

    // --- strength bounds -----------------------------------------------

    fn support_profile(&mut self, supports: &[usize], mode: Mode) -> Vec<(Nation, Trit)> {
        supports
            .iter()
            .map(|&s| (self.orders[s].nation, self.support_status(s, mode)))
            .collect()
    }

    pub(crate) fn attack_strength(&mut self, m: usize, mode: Mode) -> Bound {
        let path = self.path_status(m, mode);
        if path == Trit::No {
            return Bound::point(0);
        }
        let (target, h2h, supports) = match &self.move_facts[m] {
            Some(f) => (f.target, f.head_to_head, f.supports.clone()),
            None => return Bound::point(0),
        };
        let mover = self.orders[m].nation;
        let profile = self.support_profile(&supports, mode);

        // Who defends the target in the worst and best case for the mover.
        let (worst, best): (Option<Nation>, Option<Nation>) =
            match self.occupant[target.index()] {
                None => (None, None),
                Some(o) => {
                    let n = self.orders[o].nation;
                    if h2h == Some(o) {
                        (Some(n), Some(n))
                    } else if self.is_legal_move(o) {
                        match self.move_status(o, mode) {
                            Trit::Yes => (None, None),
                            Trit::No => (Some(n), Some(n)),
                            Trit::Maybe => (Some(n), None),
                        }
                    } else {
                        (Some(n), Some(n))
                    }
                }
            };

        let lo = if worst == Some(mover) {
            0
        } else {
            1 + profile
                .iter()
                .filter(|(n, t)| *t == Trit::Yes && Some(*n) != worst)
                .count() as i32
        };
        let hi = if best == Some(mover) {
            0
        } else {
            1 + profile
                .iter()
                .filter(|(n, t)| *t != Trit::No && Some(*n) != best)
                .count() as i32
        };
        let lo = if path == Trit::Maybe { 0 } else { lo };
        Bound::new(lo.min(hi), hi)
    }

    fn defend_strength(&mut self, o: usize, mode: Mode) -> Bound {
        let supports = match &self.move_facts[o] {
            Some(f) => f.supports.clone(),
            None => return Bound::point(1),
        };
        let profile = self.support_profile(&supports, mode);
        counted(1, &profile)
    }

    fn prevent_strength(&mut self, m: usize, mode: Mode) -> Bound {
        let path = self.path_status(m, mode);
        if path == Trit::No {
            return Bound::point(0);
        }
        let (h2h, supports) = match &self.move_facts[m] {
            Some(f) => (f.head_to_head, f.supports.clone()),
            None => return Bound::point(0),
        };
        // Losing a head-to-head forfeits the claim on the target.
        let opponent = h2h.map(|o| self.move_status(o, mode));
        if opponent == Some(Trit::Yes) {
            return Bound::point(0);
        }
        let profile = self.support_profile(&supports, mode);
        let mut bound = counted(1, &profile);
        if path == Trit::Maybe || opponent == Some(Trit::Maybe) {
            bound.min = 0;
        }
        Bound::new(bound.min, bound.max)
    }

    pub(crate) fn hold_strength(&mut self, t: TerritoryId, mode: Mode) -> Bound {
        let Some(o) = self.occupant[t.index()] else {
            return Bound::point(0);
        };
        if self.is_legal_move(o) {
            return match self.move_status(o, mode) {
                Trit::Yes => Bound::point(0),
                Trit::No => Bound::point(1),
                Trit::Maybe => Bound::new(0, 1),
            };
        }
        let supports = self.hold_supports[t.index()].clone();
        let profile = self.support_profile(&supports, mode);
        counted(1, &profile)
    }
}

fn counted(base: i32, profile: &[(Nation, Trit)]) -> Bound {
    let lo = base + profile.iter().filter(|(_, t)| *t == Trit::Yes).count() as i32;
    let hi = base + profile.iter().filter(|(_, t)| *t != Trit::No).count() as i32;
    Bound::new(lo, hi)
}

fn yes_no(value: bool) -> Trit {
    if value {
        Trit::Yes
    } else {
        Trit::No
    }
}
