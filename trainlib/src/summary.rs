//! Serializable snapshots of lines for reporting.

use serde::Serialize;

use crate::network::{Line, StationId, StationKind, StationStatus};

/// A line as plain data, with links given by station name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    /// Line name
    pub name: String,

    /// Stations in line order
    pub stations: Vec<StationSummary>,

    /// Names of termini, repeats removed
    pub termini: Vec<String>,

    /// Number of closed stations
    pub closed: usize,
}

/// A station as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSummary {
    /// Position on the line
    pub id: StationId,

    /// Display name
    pub name: String,

    /// Station, siding or depot
    pub kind: StationKind,

    /// Open or closed
    pub status: StationStatus,

    /// Names of direct successors
    pub next: Vec<String>,

    /// Names of direct predecessors
    pub previous: Vec<String>,
}

impl LineSummary {
    pub fn new(line: &Line) -> Self {
        let names = |ids: &[StationId]| -> Vec<String> {
            ids.iter()
                .filter_map(|&id| line.station(id))
                .map(|s| s.name().to_string())
                .collect()
        };

        let stations = line
            .stations()
            .iter()
            .map(|s| StationSummary {
                id: s.id(),
                name: s.name().to_string(),
                kind: s.kind(),
                status: s.status(),
                next: names(s.next()),
                previous: names(s.previous()),
            })
            .collect();

        Self {
            name: line.name().to_string(),
            stations,
            termini: names(&line.distinct_termini()),
            closed: line.stations().iter().filter(|s| s.is_closed()).count(),
        }
    }

    /// Render as indented text, one station per line.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{} ({} stations, {} closed)\n",
            self.name,
            self.stations.len(),
            self.closed
        );
        for s in &self.stations {
            let arrow = if s.next.is_empty() {
                String::new()
            } else {
                format!(" -> {}", s.next.join(", "))
            };
            out.push_str(&format!("  [{}] {} ({}){}\n", s.status, s.name, s.kind, arrow));
        }
        out.push_str(&format!("  termini: {}\n", self.termini.join(", ")));
        out
    }
}

impl From<&Line> for LineSummary {
    fn from(line: &Line) -> Self {
        Self::new(line)
    }
}
