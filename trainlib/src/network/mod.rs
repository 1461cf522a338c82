//! The station graph of a single line.
//!
//! A [`Line`] owns its [`Station`]s in input order and addresses them by
//! [`StationId`]. Transitive closures are computed once when the line is
//! constructed; after that only station status changes, either directly or
//! through the closure operations.

mod closure;
mod error;
mod line;
mod reach;
mod station;

pub use closure::Endpoint;
pub use error::LineError;
pub use line::{Line, StatusObserver};
pub use reach::{Direction, reachable};
pub use station::{Station, StationId, StationKind, StationStatus};
