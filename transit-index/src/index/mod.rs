//! Connectivity index computation.
//!
//! The connectivity index of a network is the largest number of line
//! changes a rider can be forced to make to get from one line to another:
//! the maximum, over every pair of lines, of their hop distance in the line
//! graph. A network where some station has no connections, where the
//! stations split into separate groups, or where some line cannot be
//! reached from another has no index and reports
//! [`ConnectivityIndex::Disconnected`].
//!
//! The pipeline runs the validation gates on the [`Network`](crate::network::Network),
//! builds the [`LineGraph`](crate::line_graph::LineGraph), sweeps it once
//! per line with a BFS and keeps the largest eccentricity.

mod aggregate;
mod config;
mod sweep;


use std::fmt;

pub use aggregate::{IndexOutcome, Shortcut, compute_index, compute_index_with};
pub use config::IndexConfig;
pub use sweep::LineSweep;

/// Result of the connectivity index computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectivityIndex {
    /// Some pair of stations cannot be connected at all.
    Disconnected,

    /// Worst-case number of line changes between any two lines.
    Transfers(usize),
}

impl ConnectivityIndex {
    /// The index as the signed integer printed by the command line tool:
    /// `-1` when disconnected.
    pub fn as_i64(self) -> i64 {
        match self {
            ConnectivityIndex::Disconnected => -1,
            ConnectivityIndex::Transfers(n) => n as i64,
        }
    }
}

impl fmt::Display for ConnectivityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}
