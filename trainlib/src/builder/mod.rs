//! Building linked lines from records.
//!
//! Each line record is resolved in three passes:
//!
//! 1. create a station per record, normalising names and settling kinds;
//! 2. resolve forward links, explicit or implied by record order, and
//!    remember each link's reverse;
//! 3. install backward links, treating stations with none as termini.
//!
//! The finished [`Line`] then computes every station's transitive closure.

mod config;
mod error;
mod naming;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::network::{Line, Station, StationId};
use crate::records::{LineRecord, Next};

pub use config::{BuilderConfig, DEFAULT_LINE_NAME, DEFAULT_STATION_NAME, DuplicatePolicy};
pub use error::BuildError;
pub use naming::{DefaultNaming, Naming, infer_kind};

/// Builds [`Line`]s from [`LineRecord`]s.
pub struct GraphBuilder {
    config: BuilderConfig,
    naming: Box<dyn Naming>,
}

impl GraphBuilder {
    /// A builder with the default configuration and naming.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// A builder with the given configuration and default naming.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            naming: Box::new(DefaultNaming),
        }
    }

    /// Replace the naming hooks.
    pub fn with_naming(mut self, naming: impl Naming + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build every line, in order. Stops at the first line that fails.
    pub fn build_lines(&self, records: &[LineRecord]) -> Result<Vec<Line>, BuildError> {
        records.iter().map(|r| self.build_line(r)).collect()
    }

    /// Build a single line.
    pub fn build_line(&self, record: &LineRecord) -> Result<Line, BuildError> {
        let line_name = self.naming.fix_line_name(
            record
                .name
                .as_deref()
                .unwrap_or(&self.config.default_line_name),
        );
        let count = record.stations.len();

        // First pass: create stations.
        let mut stations: Vec<Station> = Vec::with_capacity(count);
        let mut by_name: HashMap<String, StationId> = HashMap::with_capacity(count);

        for (idx, st) in record.stations.iter().enumerate() {
            let name = self
                .naming
                .fix_station_name(st.name().unwrap_or(&self.config.default_station_name));
            let kind = st.kind().unwrap_or_else(|| self.naming.infer_kind(&name));
            let id = StationId(idx);

            if let Some(shadowed) = by_name.insert(name.clone(), id) {
                match self.config.duplicate_policy {
                    DuplicatePolicy::Shadow => warn!(
                        line = %line_name,
                        station = %name,
                        %shadowed,
                        "overwriting station with duplicate name"
                    ),
                    DuplicatePolicy::Reject => {
                        return Err(BuildError::DuplicateStation {
                            line: line_name,
                            station: name,
                        });
                    }
                }
            }

            stations.push(Station::new(id, name, kind));
        }

        // Second pass: forward links. `predecessors[i]` collects the
        // stations linking to station i, in discovery order.
        let mut termini: Vec<StationId> = Vec::new();
        let mut predecessors: Vec<Vec<StationId>> = vec![Vec::new(); count];

        for (idx, st) in record.stations.iter().enumerate() {
            let id = StationId(idx);
            let targets = match st.next() {
                Some(Next::Terminus) => {
                    termini.push(id);
                    continue;
                }
                Some(Next::Stations(names)) if !names.is_empty() => names
                    .iter()
                    .map(|n| self.lookup(&by_name, n, &line_name))
                    .collect::<Result<Vec<_>, _>>()?,
                _ if idx + 1 < count => vec![StationId(idx + 1)],
                _ => {
                    termini.push(id);
                    continue;
                }
            };

            for target in targets {
                stations[idx].next.push(target);
                predecessors[target.index()].push(id);
            }
        }

        // Third pass: backward links. No way in makes a station a terminus.
        for (station, previous) in stations.iter_mut().zip(predecessors) {
            if previous.is_empty() {
                termini.push(station.id);
            }
            station.previous = previous;
        }

        debug!(
            line = %line_name,
            stations = stations.len(),
            termini = termini.len(),
            "built line"
        );

        Ok(Line::new(line_name, stations, termini)?)
    }

    /// Parse and build lines from JSON text.
    pub fn parse_lines_from_str(&self, json: &str) -> Result<Vec<Line>, BuildError> {
        let records = crate::records::from_str(json)?;
        self.build_lines(&records)
    }

    /// Parse and build lines from a JSON reader.
    pub fn parse_lines_from_reader(&self, reader: impl Read) -> Result<Vec<Line>, BuildError> {
        let records: Vec<LineRecord> = serde_json::from_reader(reader)?;
        self.build_lines(&records)
    }

    /// Parse and build lines from a JSON file.
    pub fn parse_lines_from_path(&self, path: impl AsRef<Path>) -> Result<Vec<Line>, BuildError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = self.parse_lines_from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), lines = lines.len(), "loaded network");
        Ok(lines)
    }

    /// Resolve a `next` name, accepting either the raw or the fixed-up form.
    fn lookup(
        &self,
        by_name: &HashMap<String, StationId>,
        name: &str,
        line: &str,
    ) -> Result<StationId, BuildError> {
        by_name
            .get(name)
            .or_else(|| by_name.get(&self.naming.fix_station_name(name)))
            .copied()
            .ok_or_else(|| BuildError::UnresolvedStation {
                line: line.to_string(),
                station: name.to_string(),
            })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load lines from a JSON file with the default builder.
pub fn parse_lines(path: impl AsRef<Path>) -> Result<Vec<Line>, BuildError> {
    GraphBuilder::new().parse_lines_from_path(path)
}
