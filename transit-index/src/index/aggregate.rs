//! Validation gates and aggregation of per-line eccentricities.

use std::fmt;

use tracing::debug;

use super::{ConnectivityIndex, IndexConfig, LineSweep};
use crate::domain::{Line, Station};
use crate::line_graph::LineGraph;
use crate::network::Network;

/// Why the computation finished before sweeping every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// This station has no connections.
    IsolatedStation(Station),

    /// The stations fall into this many separate groups.
    SplitNetwork { components: usize },

    /// This station sits on every line, so the line graph is complete.
    Hub(Station),

    /// This line has no connections, so no other line can reach it.
    UnusedLine(Line),

    /// The sweep from `from` never reached `to`.
    UnreachableLine { from: Line, to: Line },

    /// The sweep from this line hit the `num_lines - 1` ceiling.
    EarlyExit(Line),
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortcut::IsolatedStation(station) => write!(f, "station {station} has no connections"),
            Shortcut::SplitNetwork { components } => {
                write!(f, "stations form {components} separate groups")
            }
            Shortcut::Hub(station) => write!(f, "station {station} is on every line"),
            Shortcut::UnusedLine(line) => write!(f, "line {line} serves no station"),
            Shortcut::UnreachableLine { from, to } => write!(f, "line {to} unreachable from {from}"),
            Shortcut::EarlyExit(line) => write!(f, "line {line} needs every other line"),
        }
    }
}

/// The index together with what was computed on the way to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    pub index: ConnectivityIndex,

    /// Eccentricity of each line, indexed by line. `None` where the
    /// eccentricity was not determined: a gate stopped the computation
    /// first, or the line's sweep did not reach every line. The hub
    /// shortcut fills every entry with the eccentricity of a complete line
    /// graph without sweeping.
    pub eccentricities: Vec<Option<usize>>,

    /// Set when the computation stopped early.
    pub shortcut: Option<Shortcut>,
}

impl IndexOutcome {
    fn early(num_lines: usize, index: ConnectivityIndex, shortcut: Shortcut) -> Self {
        Self {
            index,
            eccentricities: vec![None; num_lines],
            shortcut: Some(shortcut),
        }
    }
}

/// Compute the connectivity index with the default configuration.
///
/// # Examples
///
/// ```
/// use transit_index::index::{ConnectivityIndex, compute_index};
/// use transit_index::network::Network;
///
/// // Station 2 is the only interchange between lines 1 and 2
/// let network = Network::from_triples(3, 2, &[(1, 2, 1), (2, 3, 2)]).unwrap();
/// assert_eq!(compute_index(&network), ConnectivityIndex::Transfers(1));
///
/// // Station 3 has no connections
/// let network = Network::from_triples(3, 1, &[(1, 2, 1)]).unwrap();
/// assert_eq!(compute_index(&network), ConnectivityIndex::Disconnected);
/// ```
pub fn compute_index(network: &Network) -> ConnectivityIndex {
    compute_index_with(network, &IndexConfig::default()).index
}

/// Compute the connectivity index, reporting per-line eccentricities and
/// any shortcut taken.
pub fn compute_index_with(network: &Network, config: &IndexConfig) -> IndexOutcome {
    let num_lines = network.num_lines();

    if let Some(&station) = network.isolated_stations().first() {
        debug!(station = %station, "Station has no connections");
        return IndexOutcome::early(
            num_lines,
            ConnectivityIndex::Disconnected,
            Shortcut::IsolatedStation(station),
        );
    }

    let station_components = network.station_components();
    if !station_components.is_connected() {
        debug!(
            components = station_components.count(),
            "Station graph is split"
        );
        return IndexOutcome::early(
            num_lines,
            ConnectivityIndex::Disconnected,
            Shortcut::SplitNetwork {
                components: station_components.count(),
            },
        );
    }

    if num_lines == 0 {
        // Only reachable with no stations either
        return IndexOutcome {
            index: ConnectivityIndex::Transfers(0),
            eccentricities: Vec::new(),
            shortcut: None,
        };
    }
    let ceiling = num_lines - 1;

    if config.hub_shortcut {
        if let Some(hub) = network.hub_station() {
            // Every pair of lines meets at the hub
            let index = ConnectivityIndex::Transfers(ceiling.min(1));
            debug!(hub = %hub, index = %index, "Hub station on every line");
            return IndexOutcome {
                index,
                eccentricities: vec![Some(ceiling.min(1)); num_lines],
                shortcut: Some(Shortcut::Hub(hub)),
            };
        }
    }

    if num_lines > 1 {
        if let Some(&line) = network.unused_lines().first() {
            debug!(line = %line, "Line has no connections");
            return IndexOutcome::early(
                num_lines,
                ConnectivityIndex::Disconnected,
                Shortcut::UnusedLine(line),
            );
        }
    }

    let graph = LineGraph::build(network);
    debug!(
        line_components = graph.components().count(),
        "Station graph connected"
    );

    let mut eccentricities = vec![None; num_lines];
    let mut worst = 0;

    for line in network.lines() {
        let sweep = LineSweep::from_source(&graph, line);

        let Some(eccentricity) = sweep.eccentricity() else {
            let unreached = sweep.unreached().next().unwrap_or(line);
            debug!(from = %line, to = %unreached, "Line unreachable");
            return IndexOutcome {
                index: ConnectivityIndex::Disconnected,
                eccentricities,
                shortcut: Some(Shortcut::UnreachableLine {
                    from: line,
                    to: unreached,
                }),
            };
        };

        eccentricities[line.index()] = Some(eccentricity);
        worst = worst.max(eccentricity);

        if config.early_exit && eccentricity == ceiling {
            debug!(line = %line, eccentricity, "Eccentricity at ceiling");
            return IndexOutcome {
                index: ConnectivityIndex::Transfers(ceiling),
                eccentricities,
                shortcut: Some(Shortcut::EarlyExit(line)),
            };
        }
    }

    debug!(index = worst, lines = num_lines, "Swept every line");
    IndexOutcome {
        index: ConnectivityIndex::Transfers(worst),
        eccentricities,
        shortcut: None,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::any_network;
    use proptest::prelude::*;

    proptest! {
        /// The index is -1 or at most num_lines - 1
        #[test]
        fn index_within_bounds(spec in any_network()) {
            let network = spec.build();
            match compute_index(&network) {
                ConnectivityIndex::Disconnected => {}
                ConnectivityIndex::Transfers(n) => {
                    prop_assert!(n < spec.num_lines.max(1));
                }
            }
        }

        /// Computing twice gives the same outcome
        #[test]
        fn idempotent(spec in any_network()) {
            let network = spec.build();
            let config = IndexConfig::default();
            prop_assert_eq!(
                compute_index_with(&network, &config),
                compute_index_with(&network, &config)
            );
        }

        /// Hub shortcut and early exit never change the answer
        #[test]
        fn shortcuts_are_sound(spec in any_network()) {
            let network = spec.build();
            let fast = compute_index_with(&network, &IndexConfig::default()).index;
            for config in [
                IndexConfig::new(true, false),
                IndexConfig::new(false, true),
                IndexConfig::exhaustive(),
            ] {
                prop_assert_eq!(compute_index_with(&network, &config).index, fast);
            }
        }

        /// A line whose eccentricity hits the ceiling fixes the answer
        #[test]
        fn ceiling_eccentricity_fixes_index(spec in any_network()) {
            let network = spec.build();
            let outcome = compute_index_with(&network, &IndexConfig::exhaustive());
            let ceiling = spec.num_lines - 1;
            if outcome.eccentricities.contains(&Some(ceiling)) {
                prop_assert_eq!(outcome.index, ConnectivityIndex::Transfers(ceiling));
            }
        }

        /// Removing a connection never lowers the index
        #[test]
        fn removing_connection_is_monotonic(
            spec in any_network(),
            pick in any::<prop::sample::Index>(),
        ) {
            prop_assume!(!spec.triples.is_empty());
            let before = compute_index(&spec.build());
            let after = compute_index(&spec.without(pick.index(spec.triples.len())).build());

            match (before, after) {
                (_, ConnectivityIndex::Disconnected) => {}
                (ConnectivityIndex::Disconnected, ConnectivityIndex::Transfers(n)) => {
                    prop_assert!(false, "removal reconnected the network to {}", n);
                }
                (ConnectivityIndex::Transfers(b), ConnectivityIndex::Transfers(a)) => {
                    prop_assert!(a >= b, "index dropped from {} to {}", b, a);
                }
            }
        }
    }
}
