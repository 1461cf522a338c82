//! Transitive closure of station adjacency.

use std::collections::{HashSet, VecDeque};

use super::station::{Station, StationId};

/// Which adjacency list to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow `next` edges.
    Forward,
    /// Follow `previous` edges.
    Backward,
}

impl Direction {
    fn neighbours(self, station: &Station) -> &[StationId] {
        match self {
            Direction::Forward => &station.next,
            Direction::Backward => &station.previous,
        }
    }
}

/// Every station reachable from `start` by one or more edges in `direction`.
///
/// Breadth-first, in level order. The seen set starts empty, so `start`
/// itself is only included when a cycle leads back to it. Each station
/// appears at most once.
pub fn reachable(stations: &[Station], start: StationId, direction: Direction) -> Vec<StationId> {
    let mut seen: HashSet<StationId> = HashSet::new();
    let mut order = Vec::new();
    let mut queue: VecDeque<StationId> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(station) = stations.get(current.index()) else {
            continue;
        };
        for &neighbour in direction.neighbours(station) {
            if seen.insert(neighbour) {
                order.push(neighbour);
                queue.push_back(neighbour);
            }
        }
    }

    order
}

/// Fill in `all_next` and `all_previous` for every station.
pub(crate) fn update_links(stations: &mut [Station]) {
    let view: &[Station] = stations;
    let closures: Vec<(Vec<StationId>, Vec<StationId>)> = view
        .iter()
        .map(|s| {
            (
                reachable(view, s.id, Direction::Forward),
                reachable(view, s.id, Direction::Backward),
            )
        })
        .collect();

    for (station, (all_next, all_previous)) in stations.iter_mut().zip(closures) {
        station.reach = all_next.iter().copied().collect();
        station.all_next = all_next;
        station.all_previous = all_previous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::StationKind;

    /// Build unlinked stations then wire up `edges` in both directions.
    fn graph(n: usize, edges: &[(usize, usize)]) -> Vec<Station> {
        let mut stations: Vec<Station> = (0..n)
            .map(|i| Station::new(StationId(i), format!("s{i}"), StationKind::Station))
            .collect();
        for &(from, to) in edges {
            stations[from].next.push(StationId(to));
            stations[to].previous.push(StationId(from));
        }
        stations
    }

    fn ids(v: &[usize]) -> Vec<StationId> {
        v.iter().copied().map(StationId).collect()
    }

    #[test]
    fn linear_chain() {
        let stations = graph(3, &[(0, 1), (1, 2)]);
        assert_eq!(reachable(&stations, StationId(0), Direction::Forward), ids(&[1, 2]));
        assert_eq!(reachable(&stations, StationId(2), Direction::Backward), ids(&[1, 0]));
        assert!(reachable(&stations, StationId(2), Direction::Forward).is_empty());
    }

    #[test]
    fn level_order_discovery() {
        // 0 -> 1 -> 3, 0 -> 2 -> 4
        let stations = graph(5, &[(0, 1), (0, 2), (1, 3), (2, 4)]);
        assert_eq!(
            reachable(&stations, StationId(0), Direction::Forward),
            ids(&[1, 2, 3, 4])
        );
    }

    #[test]
    fn diamond_has_no_duplicates() {
        let stations = graph(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(reachable(&stations, StationId(0), Direction::Forward), ids(&[1, 2, 3]));
        assert_eq!(reachable(&stations, StationId(3), Direction::Backward), ids(&[1, 2, 0]));
    }

    #[test]
    fn cycle_terminates_and_includes_start() {
        let stations = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(reachable(&stations, StationId(0), Direction::Forward), ids(&[1, 2, 0]));
        assert_eq!(reachable(&stations, StationId(0), Direction::Backward), ids(&[2, 1, 0]));
    }

    #[test]
    fn update_links_fills_every_station() {
        let mut stations = graph(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        update_links(&mut stations);
        assert_eq!(stations[0].all_next, ids(&[1, 2, 3]));
        assert_eq!(stations[1].all_next, ids(&[3]));
        assert_eq!(stations[2].all_next, ids(&[3]));
        assert!(stations[3].all_next.is_empty());
        assert!(stations[0].all_previous.is_empty());
        assert_eq!(stations[1].all_previous, ids(&[0]));
        assert_eq!(stations[3].all_previous.len(), 3);
    }

    #[test]
    fn leads_to_matches_all_next() {
        let mut stations = graph(5, &[(0, 1), (1, 2), (2, 1), (3, 4)]);
        update_links(&mut stations);
        for a in &stations {
            for b in &stations {
                assert_eq!(a.leads_to(b.id), a.all_next.contains(&b.id), "{} -> {}", a.id, b.id);
            }
        }
        assert!(stations[1].leads_to(StationId(1)));
        assert!(!stations[0].leads_to(StationId(3)));
    }
}
