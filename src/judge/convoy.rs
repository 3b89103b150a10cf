//! Convoy chain enumeration.
//!
//! For a move `source -> target`, every distinct ordered chain of matching
//! convoy fleets is found up front; whether a chain survives dislodgement is
//! the Path decision's question during resolution.

use crate::map::{Map, TerritoryId};
use crate::order::{Order, OrderKind};

/// All distinct convoy chains for the move `source -> target`, as lists of
/// order indices of the fleets in travel order. Only legal Convoy orders
/// naming exactly this move participate.
pub(crate) fn convoy_routes(
    map: &Map,
    orders: &[Order],
    legal: &[bool],
    source: TerritoryId,
    target: TerritoryId,
) -> Vec<Vec<usize>> {
    let fleets: Vec<usize> = orders
        .iter()
        .enumerate()
        .filter(|(i, o)| {
            legal[*i]
                && matches!(o.kind, OrderKind::Convoy { aux, target: t } if aux == source && t == target)
        })
        .map(|(i, _)| i)
        .collect();

    let mut routes = Vec::new();
    let mut visited = vec![false; orders.len()];
    let mut chain = Vec::new();
    for &f in &fleets {
        if map.territory(source).neighbours.contains(&orders[f].source) {
            visited[f] = true;
            chain.push(f);
            extend(map, orders, &fleets, &mut visited, &mut chain, &mut routes, target);
            chain.pop();
            visited[f] = false;
        }
    }
    routes
}

fn extend(
    map: &Map,
    orders: &[Order],
    fleets: &[usize],
    visited: &mut Vec<bool>,
    chain: &mut Vec<usize>,
    routes: &mut Vec<Vec<usize>>,
    target: TerritoryId,
) {
    let at = orders[chain[chain.len() - 1]].source;
    if map.territory(at).neighbours.contains(&target) {
        routes.push(chain.clone());
    }
    for &f in fleets {
        if !visited[f] && map.territory(at).neighbours.contains(&orders[f].source) {
            visited[f] = true;
            chain.push(f);
            extend(map, orders, fleets, visited, chain, routes, target);
            chain.pop();
            visited[f] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Nation;

    fn t(map: &Map, abbr: &str) -> TerritoryId {
        map.find(abbr).unwrap()
    }

    #[test]
    fn single_fleet_chain() {
        let map = Map::standard();
        let lon = t(&map, "lon");
        let bel = t(&map, "bel");
        let nth = t(&map, "nth");
        let orders = [
            Order::move_to(Nation::England, lon, bel),
            Order::convoy(Nation::England, nth, lon, bel),
        ];
        let routes = convoy_routes(&map, &orders, &[true, true], lon, bel);
        assert_eq!(routes, vec![vec![1]]);
    }

    #[test]
    fn multi_fleet_chain_in_travel_order() {
        let map = Map::standard();
        let lon = t(&map, "lon");
        let tun = t(&map, "tun");
        let eng = t(&map, "eng");
        let mao = t(&map, "mao");
        let wes = t(&map, "wes");
        let orders = [
            Order::move_to(Nation::England, lon, tun),
            Order::convoy(Nation::England, eng, lon, tun),
            Order::convoy(Nation::England, mao, lon, tun),
            Order::convoy(Nation::England, wes, lon, tun),
        ];
        let routes = convoy_routes(&map, &orders, &[true; 4], lon, tun);
        assert_eq!(routes, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn disjoint_chains_both_found() {
        let map = Map::standard();
        let lon = t(&map, "lon");
        let bre = t(&map, "bre");
        let eng = t(&map, "eng");
        let nth = t(&map, "nth");
        let mao = t(&map, "mao");
        // English Channel alone, or around through the North Sea and Mid-Atlantic.
        let orders = [
            Order::move_to(Nation::England, lon, bre),
            Order::convoy(Nation::England, eng, lon, bre),
            Order::convoy(Nation::England, nth, lon, bre),
            Order::convoy(Nation::England, mao, lon, bre),
        ];
        let routes = convoy_routes(&map, &orders, &[true; 4], lon, bre);
        assert!(routes.contains(&vec![1]));
        // Chains may not revisit a fleet, and every chain must reach Brest.
        for r in &routes {
            let mut seen = std::collections::HashSet::new();
            assert!(r.iter().all(|f| seen.insert(*f)));
        }
        assert!(routes.len() >= 2);
    }

    #[test]
    fn mismatched_convoy_is_ignored() {
        let map = Map::standard();
        let lon = t(&map, "lon");
        let bel = t(&map, "bel");
        let hol = t(&map, "hol");
        let nth = t(&map, "nth");
        let orders = [
            Order::move_to(Nation::England, lon, bel),
            Order::convoy(Nation::England, nth, lon, hol),
        ];
        let routes = convoy_routes(&map, &orders, &[true, true], lon, bel);
        assert!(routes.is_empty());
    }
}
