//! Input record format for line definitions.
//!
//! A network file is a JSON array of line records:
//!
//! ```json
//! [
//!   {
//!     "name": "Test line",
//!     "stations": [
//!       "Station 1",
//!       { "name": "Station 2", "next": ["Depot 1"] },
//!       { "name": "Depot 1", "type": "depot", "next": null }
//!     ]
//!   }
//! ]
//! ```
//!
//! Records are deliberately loose: names, kinds and `next` may all be left
//! out and are filled in by the [`GraphBuilder`](crate::builder::GraphBuilder).

use serde::{Deserialize, Deserializer};

use crate::network::StationKind;

/// One line: a name and its stations in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LineRecord {
    /// Line name; the builder substitutes a default when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// Station records in line order.
    #[serde(default)]
    pub stations: Vec<StationRecord>,
}

impl LineRecord {
    /// Create a named line record.
    pub fn new(name: impl Into<String>, stations: Vec<StationRecord>) -> Self {
        Self {
            name: Some(name.into()),
            stations,
        }
    }
}

/// A station, either as a bare name or with explicit details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StationRecord {
    /// Compact form: just the name.
    Name(String),
    /// Object form.
    Detailed(StationDetails),
}

impl StationRecord {
    /// Compact record for a station called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        StationRecord::Name(name.into())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            StationRecord::Name(name) => Some(name),
            StationRecord::Detailed(details) => details.name.as_deref(),
        }
    }

    pub fn kind(&self) -> Option<StationKind> {
        match self {
            StationRecord::Name(_) => None,
            StationRecord::Detailed(details) => details.kind,
        }
    }

    pub fn next(&self) -> Option<&Next> {
        match self {
            StationRecord::Name(_) => None,
            StationRecord::Detailed(details) => details.next.as_ref(),
        }
    }
}

impl From<StationDetails> for StationRecord {
    fn from(details: StationDetails) -> Self {
        StationRecord::Detailed(details)
    }
}

/// Object form of a station record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StationDetails {
    #[serde(default)]
    pub name: Option<String>,

    /// Explicit kind; inferred from the name when absent.
    #[serde(default, rename = "type")]
    pub kind: Option<StationKind>,

    /// Outbound links. `None` means the field was left out.
    #[serde(default, deserialize_with = "deserialize_next")]
    pub next: Option<Next>,
}

impl StationDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: StationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Link to the named stations.
    pub fn with_next<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next = Some(Next::Stations(names.into_iter().map(Into::into).collect()));
        self
    }

    /// Mark as an explicit terminus.
    pub fn terminus(mut self) -> Self {
        self.next = Some(Next::Terminus);
        self
    }
}

/// The `next` field of a station record, when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    /// `"next": null`: the station is a declared terminus.
    Terminus,
    /// A single name or a list of names. An empty list behaves as if the
    /// field were left out.
    Stations(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Present-but-null must stay distinguishable from absent, so a null value
/// becomes `Some(Next::Terminus)` while a missing field falls back to `None`.
fn deserialize_next<'de, D>(deserializer: D) -> Result<Option<Next>, D::Error>
where
    D: Deserializer<'de>,
{
    let next = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Next::Terminus,
        Some(OneOrMany::One(name)) => Next::Stations(vec![name]),
        Some(OneOrMany::Many(names)) => Next::Stations(names),
    };
    Ok(Some(next))
}

/// Parse a JSON array of line records.
pub fn from_str(json: &str) -> Result<Vec<LineRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
