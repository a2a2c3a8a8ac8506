//! Transit connectivity index.
//!
//! Given stations joined pairwise by numbered transit lines, finds the
//! worst-case number of line changes needed to get from one line of the
//! network to any other, or reports that the network is disconnected.
//!
//! ```
//! use transit_index::index::{ConnectivityIndex, compute_index};
//! use transit_index::input::parse_network;
//!
//! let network = parse_network("3 2 2\n1 2 1\n2 3 2\n").unwrap();
//! assert_eq!(compute_index(&network), ConnectivityIndex::Transfers(1));
//! ```

pub mod components;
pub mod domain;
pub mod index;
pub mod input;
pub mod line_graph;
pub mod logging;
pub mod network;
pub mod report;
pub mod station_search;

#[cfg(test)]
mod testing;
