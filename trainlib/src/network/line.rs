//! Lines: owned station graphs with closure operations.

use std::fmt;

use tracing::{debug, warn};

use super::closure::{ClosurePlan, Endpoint, orient, walk_towards};
use super::error::LineError;
use super::reach::update_links;
use super::station::{Station, StationId, StationStatus};

/// Callback invoked on every station status transition.
///
/// Only actual changes are reported: closing an already closed station
/// does not call the observer.
pub trait StatusObserver {
    fn on_transition(&mut self, station: &Station, status: StationStatus);
}

impl<F> StatusObserver for F
where
    F: FnMut(&Station, StationStatus),
{
    fn on_transition(&mut self, station: &Station, status: StationStatus) {
        self(station, status)
    }
}

/// A named line owning its stations.
///
/// Stations are addressed by [`StationId`], their index in [`Line::stations`].
/// Topology is fixed at construction; only station status changes afterwards.
/// A line is `Send`, so a concurrent host can share it behind a lock.
pub struct Line {
    name: String,
    stations: Vec<Station>,
    termini: Vec<StationId>,
    observer: Option<Box<dyn StatusObserver + Send>>,
}

impl Line {
    /// Create a line from linked stations and compute every station's
    /// transitive closure.
    ///
    /// Each station's id must equal its position in `stations`, and
    /// `next`, `previous` and `termini` must only name stations in the list.
    pub fn new(
        name: impl Into<String>,
        mut stations: Vec<Station>,
        termini: Vec<StationId>,
    ) -> Result<Self, LineError> {
        let name = name.into();
        validate(&name, &stations, &termini)?;
        update_links(&mut stations);
        Ok(Self {
            name,
            stations,
            termini,
            observer: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stations in input order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Termini as declared and inferred. May contain repeats.
    pub fn termini(&self) -> &[StationId] {
        &self.termini
    }

    /// Termini with repeats removed, keeping first occurrence order.
    pub fn distinct_termini(&self) -> Vec<StationId> {
        let mut out: Vec<StationId> = Vec::with_capacity(self.termini.len());
        for &t in &self.termini {
            if !out.contains(&t) {
                out.push(t);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Get a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    /// Find the first station with exactly this display name.
    pub fn resolve_station(&self, name: &str) -> Option<StationId> {
        self.stations.iter().find(|s| s.name == name).map(|s| s.id)
    }

    /// Ids of all currently closed stations, in line order.
    pub fn closed_stations(&self) -> Vec<StationId> {
        self.stations
            .iter()
            .filter(|s| s.is_closed())
            .map(|s| s.id)
            .collect()
    }

    /// Install an observer for status transitions, replacing any existing one.
    pub fn set_observer(&mut self, observer: impl StatusObserver + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the status observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Close a station. Returns whether its status changed.
    pub fn close_station(&mut self, id: StationId) -> Result<bool, LineError> {
        self.check(id)?;
        Ok(self.transition(id, StationStatus::Closed))
    }

    /// Reopen a station. Returns whether its status changed.
    pub fn open_station(&mut self, id: StationId) -> Result<bool, LineError> {
        self.check(id)?;
        Ok(self.transition(id, StationStatus::Open))
    }

    /// Close every station on the line, regardless of topology.
    ///
    /// Returns the stations that were open before the call.
    pub fn close_entire_line(&mut self) -> Vec<StationId> {
        let ids: Vec<StationId> = self.stations.iter().map(|s| s.id).collect();
        self.close_all(&ids)
    }

    /// Close the stretch of line between `from` and `to`.
    ///
    /// The ends may be given in either order. If neither end resolves the
    /// whole line is closed; if only one does, nothing is changed and
    /// [`LineError::OpenEndedClosure`] is returned. Returns the stations
    /// whose status changed, in the order they were closed.
    pub fn close_line<'a>(
        &mut self,
        from: impl Into<Endpoint<'a>>,
        to: impl Into<Endpoint<'a>>,
    ) -> Result<Vec<StationId>, LineError> {
        let plan = self.plan(from.into(), to.into())?;
        Ok(self.execute(plan))
    }

    /// Close `from` to `via` and `to` to `via` as two independent ranges.
    ///
    /// Both ranges are validated before anything is closed. An absent `via`
    /// is the same as [`Line::close_line`].
    pub fn close_line_via<'a>(
        &mut self,
        from: impl Into<Endpoint<'a>>,
        to: impl Into<Endpoint<'a>>,
        via: impl Into<Endpoint<'a>>,
    ) -> Result<Vec<StationId>, LineError> {
        let (from, to, via) = (from.into(), to.into(), via.into());
        if via == Endpoint::Absent {
            return self.close_line(from, to);
        }

        let first = self.plan(from, via)?;
        let second = self.plan(to, via)?;
        let mut changed = self.execute(first);
        changed.extend(self.execute(second));
        Ok(changed)
    }

    fn check(&self, id: StationId) -> Result<(), LineError> {
        if id.index() < self.stations.len() {
            Ok(())
        } else {
            Err(LineError::UnknownStation {
                line: self.name.clone(),
                id,
            })
        }
    }

    fn resolve(&self, endpoint: Endpoint<'_>) -> Result<Option<StationId>, LineError> {
        match endpoint {
            Endpoint::Station(id) => self.check(id).map(|()| Some(id)),
            Endpoint::Name(name) => Ok(self.resolve_station(name)),
            Endpoint::Absent => Ok(None),
        }
    }

    fn plan(&self, from: Endpoint<'_>, to: Endpoint<'_>) -> Result<ClosurePlan, LineError> {
        match (self.resolve(from)?, self.resolve(to)?) {
            (None, None) => {
                warn!(
                    line = %self.name,
                    %from,
                    %to,
                    "neither end of closure resolved, closing entire line"
                );
                Ok(ClosurePlan::EntireLine)
            }
            (Some(_), None) => Err(self.open_ended(to)),
            (None, Some(_)) => Err(self.open_ended(from)),
            (Some(from), Some(to)) => Ok(orient(&self.stations, from, to)),
        }
    }

    fn open_ended(&self, endpoint: Endpoint<'_>) -> LineError {
        LineError::OpenEndedClosure {
            line: self.name.clone(),
            endpoint: endpoint.to_string(),
        }
    }

    fn execute(&mut self, plan: ClosurePlan) -> Vec<StationId> {
        match plan {
            ClosurePlan::EntireLine => self.close_entire_line(),
            ClosurePlan::Range { from, to } => {
                let route = walk_towards(&self.stations, from, to);
                debug!(
                    line = %self.name,
                    from = %self.stations[from.index()].name,
                    to = %self.stations[to.index()].name,
                    stations = route.len(),
                    "closing line"
                );
                self.close_all(&route)
            }
        }
    }

    fn close_all(&mut self, ids: &[StationId]) -> Vec<StationId> {
        ids.iter()
            .copied()
            .filter(|&id| self.transition(id, StationStatus::Closed))
            .collect()
    }

    fn transition(&mut self, id: StationId, status: StationStatus) -> bool {
        let station = &mut self.stations[id.index()];
        if !station.set_status(status) {
            return false;
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_transition(station, status);
        }
        true
    }
}

fn validate(line: &str, stations: &[Station], termini: &[StationId]) -> Result<(), LineError> {
    let count = stations.len();
    for (index, station) in stations.iter().enumerate() {
        if station.id.index() != index {
            return Err(LineError::MisplacedStation {
                line: line.to_string(),
                index,
                id: station.id,
            });
        }
        let mut links = station.next.iter().chain(&station.previous);
        if let Some(&to) = links.find(|id| id.index() >= count) {
            return Err(LineError::DanglingLink {
                line: line.to_string(),
                from: station.id,
                to,
            });
        }
    }
    match termini.iter().find(|id| id.index() >= count) {
        Some(&id) => Err(LineError::UnknownStation {
            line: line.to_string(),
            id,
        }),
        None => Ok(()),
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("name", &self.name)
            .field("stations", &self.stations)
            .field("termini", &self.termini)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
