//! Network construction error types.

use crate::domain::{DomainError, Line, Station};

/// Errors from building a [`Network`](super::Network).
///
/// These are input errors: the connection list disagrees with the declared
/// station or line counts. A disconnected network is not an error; it is a
/// valid network whose index is
/// [`ConnectivityIndex::Disconnected`](crate::index::ConnectivityIndex).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection names a station beyond the declared count
    #[error("station {station} out of range: network has {num_stations} stations")]
    StationOutOfRange { station: Station, num_stations: usize },

    /// A connection names a line beyond the declared count
    #[error("line {line} out of range: network has {num_lines} lines")]
    LineOutOfRange { line: Line, num_lines: usize },

    /// A connection is malformed
    #[error(transparent)]
    Domain(#[from] DomainError),
}
