//! Graph construction error types.

use std::path::PathBuf;

use crate::network::LineError;

/// Errors that abort building a line.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A `next` list names a station that is not on the line
    #[error("line {line}: next refers to unknown station {station:?}")]
    UnresolvedStation { line: String, station: String },

    /// Two stations on the line share a name and duplicates are rejected
    #[error("line {line}: duplicate station name {station:?}")]
    DuplicateStation { line: String, station: String },

    /// The assembled stations did not form a consistent line
    #[error(transparent)]
    Line(#[from] LineError),

    /// Input was not a valid array of line records
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read the input file
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
