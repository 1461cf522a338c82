//! Name normalisation and kind inference hooks.

use crate::network::StationKind;

/// Hooks the builder calls while reading records.
///
/// Every method has a default, so an implementation only overrides what it
/// needs. Station kind inference runs on the already fixed-up name.
pub trait Naming {
    /// Normalise a station name from a record.
    fn fix_station_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Normalise a line name from a record.
    fn fix_line_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Guess a station's kind when the record does not say.
    fn infer_kind(&self, name: &str) -> StationKind {
        infer_kind(name)
    }
}

/// Identity fixups and the substring kind heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl Naming for DefaultNaming {}

/// Infer a kind from a name: "depot" anywhere wins, then "siding".
///
/// ```
/// use trainlib::builder::infer_kind;
/// use trainlib::network::StationKind;
///
/// assert_eq!(infer_kind("Northfields Depot"), StationKind::Depot);
/// assert_eq!(infer_kind("Ruislip Siding"), StationKind::Siding);
/// assert_eq!(infer_kind("Baker Street"), StationKind::Station);
/// ```
pub fn infer_kind(name: &str) -> StationKind {
    let lower = name.to_lowercase();
    if lower.contains("depot") {
        StationKind::Depot
    } else if lower.contains("siding") {
        StationKind::Siding
    } else {
        StationKind::Station
    }
}
