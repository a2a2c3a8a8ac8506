//! The line graph.
//!
//! Nodes are lines; two lines are adjacent when at least one station is
//! served by both. Each hop in this graph is exactly one line change, so
//! unweighted hop counts are transfer counts.
//!
//! Construction is a clique expansion per station: a station on `k` distinct
//! lines contributes `k * (k - 1) / 2` links, so building costs
//! `O(sum of k^2)` over all stations.

use tracing::debug;

use crate::components::{Components, label_components};
use crate::domain::{Line, Station};
use crate::network::Network;

/// One directed half of a line-graph edge, tagged with the station where
/// the two lines meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLink {
    /// The line reached by changing here.
    pub line: Line,
    /// The shared station that induced this link.
    pub via: Station,
}

/// Undirected graph over the lines of a [`Network`].
///
/// Two lines meeting at several stations are joined by several links, one
/// per shared station.
#[derive(Debug, Clone)]
pub struct LineGraph {
    links: Vec<Vec<LineLink>>,
}

impl LineGraph {
    /// Derive the line graph from a network's station-to-lines mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_index::domain::Line;
    /// use transit_index::line_graph::LineGraph;
    /// use transit_index::network::Network;
    ///
    /// // Line 1 serves stations 1-2, line 2 serves 2-3.
    /// let network = Network::from_triples(3, 2, &[(1, 2, 1), (2, 3, 2)]).unwrap();
    /// let graph = LineGraph::build(&network);
    ///
    /// assert_eq!(graph.neighbours(Line(0)).collect::<Vec<_>>(), vec![Line(1)]);
    /// assert_eq!(graph.num_links(), 1);
    /// ```
    pub fn build(network: &Network) -> Self {
        let mut links: Vec<Vec<LineLink>> = vec![Vec::new(); network.num_lines()];

        for station in network.stations() {
            let lines = network.lines_at(station);
            for (i, &a) in lines.iter().enumerate() {
                for &b in &lines[i + 1..] {
                    links[a.index()].push(LineLink { line: b, via: station });
                    links[b.index()].push(LineLink { line: a, via: station });
                }
            }
        }

        let graph = Self { links };
        debug!(
            lines = graph.num_lines(),
            links = graph.num_links(),
            "Built line graph"
        );
        graph
    }

    pub fn num_lines(&self) -> usize {
        self.links.len()
    }

    /// Number of undirected links (each shared station counted once per
    /// pair of lines meeting there).
    pub fn num_links(&self) -> usize {
        self.links.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// All links leaving `line`.
    pub fn links(&self, line: Line) -> &[LineLink] {
        &self.links[line.index()]
    }

    /// Lines adjacent to `line`. A line reached through several shared
    /// stations is yielded once per station.
    pub fn neighbours(&self, line: Line) -> impl Iterator<Item = Line> + '_ {
        self.links(line).iter().map(|link| link.line)
    }

    /// Connected components over lines.
    pub fn components(&self) -> Components {
        let links = &self.links;
        label_components(links.len(), move |u| {
            links[u].iter().map(|link| link.line.index())
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::path_line_network;
    use proptest::prelude::*;

    proptest! {
        /// With every line used and no isolated station, the station graph
        /// and the line graph are connected together or not at all
        #[test]
        fn connectivity_matches_station_graph(spec in path_line_network()) {
            let network = spec.build();
            prop_assume!(network.isolated_stations().is_empty());

            let graph = LineGraph::build(&network);
            prop_assert_eq!(
                network.station_components().is_connected(),
                graph.components().is_connected()
            );
        }

        /// Links come in matching pairs
        #[test]
        fn links_are_symmetric(spec in path_line_network()) {
            let network = spec.build();
            let graph = LineGraph::build(&network);
            for a in network.lines() {
                for link in graph.links(a) {
                    let reverse = LineLink { line: a, via: link.via };
                    prop_assert!(graph.links(link.line).contains(&reverse));
                    prop_assert!(network.lines_at(link.via).contains(&a));
                    prop_assert!(network.lines_at(link.via).contains(&link.line));
                }
            }
        }
    }
}
