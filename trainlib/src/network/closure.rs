//! Line closure propagation.
//!
//! Closing a line between two stations walks forward from one end towards
//! the other, only entering branches that provably lead to the target. The
//! precomputed `all_next` sets are the reachability oracle, so the walk
//! touches nothing outside the union of paths between the two ends.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use super::station::{Station, StationId};

/// One end of a closure request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// A station already resolved to its id.
    Station(StationId),
    /// A station looked up by display name.
    Name(&'a str),
    /// No station given.
    Absent,
}

impl From<StationId> for Endpoint<'_> {
    fn from(id: StationId) -> Self {
        Endpoint::Station(id)
    }
}

impl<'a> From<&'a str> for Endpoint<'a> {
    fn from(name: &'a str) -> Self {
        Endpoint::Name(name)
    }
}

impl<'a> From<&'a String> for Endpoint<'a> {
    fn from(name: &'a String) -> Self {
        Endpoint::Name(name)
    }
}

impl<'a, T: Into<Endpoint<'a>>> From<Option<T>> for Endpoint<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Endpoint::Absent, Into::into)
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Station(id) => write!(f, "{id}"),
            Endpoint::Name(name) => write!(f, "{name:?}"),
            Endpoint::Absent => f.write_str("<absent>"),
        }
    }
}

/// What a validated closure request will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClosurePlan {
    /// Neither end resolved: close every station.
    EntireLine,
    /// Walk forward from `from` until `to`.
    Range { from: StationId, to: StationId },
}

/// Orient a resolved pair so that the walk follows `next` edges.
///
/// If `to` is not forward-reachable from `from` the two are swapped. When
/// neither reaches the other the walk will close only the starting station.
pub(crate) fn orient(stations: &[Station], from: StationId, to: StationId) -> ClosurePlan {
    let forward = from == to || stations[from.index()].leads_to(to);
    if forward {
        ClosurePlan::Range { from, to }
    } else {
        ClosurePlan::Range { from: to, to: from }
    }
}

/// Stations to close when walking from `from` towards `target`, in visiting order.
///
/// A successor is entered only if it is the target or leads to it. This is
/// the order a depth-first recursion would close them in; a station reached
/// along several qualifying branches is listed once.
pub(crate) fn walk_towards(
    stations: &[Station],
    from: StationId,
    target: StationId,
) -> Vec<StationId> {
    let mut visited: HashSet<StationId> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![from];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        if current == target {
            continue;
        }

        let station = &stations[current.index()];
        let qualifying: Vec<StationId> = station
            .next
            .iter()
            .copied()
            .filter(|&s| s == target || stations[s.index()].leads_to(target))
            .collect();

        trace!(
            station = %station.name,
            branches = qualifying.len(),
            "closure walk"
        );

        // Reversed so the first successor is popped first.
        stack.extend(qualifying.into_iter().rev());
    }

    order
}
