//! Line operation error types.

use super::StationId;

/// Errors from operations on a built line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// Exactly one end of a closure failed to resolve
    #[error("cannot close line {line} open-ended: {endpoint} does not resolve to a station")]
    OpenEndedClosure { line: String, endpoint: String },

    /// A station id does not belong to this line
    #[error("station {id} is not on line {line}")]
    UnknownStation { line: String, id: StationId },

    /// A station's id does not match its position in the line
    #[error("line {line}: station {id} is at position {index}")]
    MisplacedStation {
        line: String,
        index: usize,
        id: StationId,
    },

    /// A station links to an id outside the line
    #[error("line {line}: station {from} links to {to}, which is not on the line")]
    DanglingLink {
        line: String,
        from: StationId,
        to: StationId,
    },
}
