//! Station nodes.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a station within its owning [`Line`](super::Line).
///
/// This is the station's index in the line's station list. Two stations
/// sharing a display name still have distinct ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl StationId {
    /// Returns the index into the owning line's station list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What sort of place a station is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationKind {
    /// A passenger station.
    #[default]
    Station,
    /// A siding off the running line.
    Siding,
    /// A depot.
    Depot,
}

impl StationKind {
    /// Returns the lowercase record-format name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            StationKind::Station => "station",
            StationKind::Siding => "siding",
            StationKind::Depot => "depot",
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a station is in service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    #[default]
    Open,
    Closed,
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationStatus::Open => f.write_str("open"),
            StationStatus::Closed => f.write_str("closed"),
        }
    }
}

/// A node in a line's graph.
///
/// Adjacency is stored as [`StationId`]s into the owning line. Stations are
/// only mutated through the line, which keeps the status observer informed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub(crate) id: StationId,
    pub(crate) name: String,
    pub(crate) kind: StationKind,
    pub(crate) status: StationStatus,
    pub(crate) next: Vec<StationId>,
    pub(crate) previous: Vec<StationId>,
    pub(crate) all_next: Vec<StationId>,
    pub(crate) all_previous: Vec<StationId>,
    /// Membership index over `all_next`.
    pub(crate) reach: HashSet<StationId>,
}

impl Station {
    /// Create an open station with no links.
    pub fn new(id: StationId, name: impl Into<String>, kind: StationKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            status: StationStatus::Open,
            next: Vec::new(),
            previous: Vec::new(),
            all_next: Vec::new(),
            all_previous: Vec::new(),
            reach: HashSet::new(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StationKind {
        self.kind
    }

    pub fn status(&self) -> StationStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == StationStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == StationStatus::Closed
    }

    /// Direct successors.
    pub fn next(&self) -> &[StationId] {
        &self.next
    }

    /// Direct predecessors, in the order they were discovered.
    pub fn previous(&self) -> &[StationId] {
        &self.previous
    }

    /// Every station reachable by following `next`, in breadth-first order.
    pub fn all_next(&self) -> &[StationId] {
        &self.all_next
    }

    /// Every station reachable by following `previous`, in breadth-first order.
    pub fn all_previous(&self) -> &[StationId] {
        &self.all_previous
    }

    /// Returns true if `other` can be reached from here by one or more `next` edges.
    pub fn leads_to(&self, other: StationId) -> bool {
        self.reach.contains(&other)
    }

    /// Set the status, returning whether it changed.
    pub(crate) fn set_status(&mut self, status: StationStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
