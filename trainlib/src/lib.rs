//! Transit line graphs with closure propagation.
//!
//! Lines are read from loosely structured records into directed station
//! graphs. Each station knows everything reachable from it in either
//! direction, which lets a closure between two stations touch only the
//! branches that actually run between them.

pub mod builder;
pub mod network;
pub mod records;
pub mod summary;

pub use builder::{BuildError, GraphBuilder, parse_lines};
pub use network::{Endpoint, Line, LineError, Station, StationId, StationKind, StationStatus};
