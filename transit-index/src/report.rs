//! Diagnostic report of one index computation.
//!
//! Serialized as JSON by the command line tool's `--report` mode. All
//! station and line numbers are 1-based, as in the input.

use serde::Serialize;

use crate::index::IndexOutcome;
use crate::line_graph::LineGraph;
use crate::network::Network;

/// Summary of a network and the index computed for it.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The connectivity index, `-1` when disconnected
    pub index: i64,

    pub num_stations: usize,
    pub num_lines: usize,
    pub num_connections: usize,

    /// Declared lines that serve no station
    pub unused_lines: Vec<usize>,

    /// Why the computation stopped early, if it did
    pub shortcut: Option<String>,

    /// Eccentricity of each swept line
    pub eccentricities: Vec<LineEccentricity>,

    /// Every line-graph link, once per pair of lines and shared station
    pub links: Vec<LinkReport>,
}

/// Eccentricity of one line.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LineEccentricity {
    pub line: usize,

    /// `null` when the computation stopped before determining it
    pub eccentricity: Option<usize>,
}

/// Two lines meeting at a station.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub from: usize,
    pub to: usize,
    pub via: usize,
}

impl Report {
    pub fn new(network: &Network, outcome: &IndexOutcome) -> Self {
        let graph = LineGraph::build(network);

        let eccentricities = outcome
            .eccentricities
            .iter()
            .zip(network.lines())
            .map(|(eccentricity, line)| LineEccentricity {
                line: line.one_based(),
                eccentricity: *eccentricity,
            })
            .collect();

        let links = network
            .lines()
            .flat_map(|from| {
                graph
                    .links(from)
                    .iter()
                    .filter(move |link| link.line > from)
                    .map(move |link| LinkReport {
                        from: from.one_based(),
                        to: link.line.one_based(),
                        via: link.via.one_based(),
                    })
            })
            .collect();

        Self {
            index: outcome.index.as_i64(),
            num_stations: network.num_stations(),
            num_lines: network.num_lines(),
            num_connections: network.num_connections(),
            unused_lines: network
                .unused_lines()
                .into_iter()
                .map(|line| line.one_based())
                .collect(),
            shortcut: outcome.shortcut.map(|s| s.to_string()),
            eccentricities,
            links,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IndexConfig, compute_index_with};

    fn report(n: usize, l: usize, triples: &[(u64, u64, u64)], config: &IndexConfig) -> Report {
        let network = Network::from_triples(n, l, triples).unwrap();
        let outcome = compute_index_with(&network, config);
        Report::new(&network, &outcome)
    }

    #[test]
    fn chain_report() {
        let r = report(
            4,
            3,
            &[(1, 2, 1), (2, 3, 2), (3, 4, 3)],
            &IndexConfig::exhaustive(),
        );

        assert_eq!(r.index, 2);
        assert_eq!(r.num_stations, 4);
        assert_eq!(r.num_lines, 3);
        assert_eq!(r.num_connections, 3);
        assert!(r.unused_lines.is_empty());
        assert_eq!(r.shortcut, None);
        assert_eq!(
            r.eccentricities,
            vec![
                LineEccentricity { line: 1, eccentricity: Some(2) },
                LineEccentricity { line: 2, eccentricity: Some(1) },
                LineEccentricity { line: 3, eccentricity: Some(2) },
            ]
        );
        assert_eq!(
            r.links,
            vec![
                LinkReport { from: 1, to: 2, via: 2 },
                LinkReport { from: 2, to: 3, via: 3 },
            ]
        );
    }

    #[test]
    fn disconnected_report() {
        let r = report(3, 1, &[(1, 2, 1)], &IndexConfig::default());
        assert_eq!(r.index, -1);
        assert_eq!(r.shortcut.as_deref(), Some("station S3 has no connections"));
        assert!(r.links.is_empty());
    }

    #[test]
    fn unused_lines_listed() {
        let r = report(3, 4, &[(1, 2, 1), (2, 3, 3)], &IndexConfig::default());
        assert_eq!(r.index, -1);
        assert_eq!(r.unused_lines, vec![2, 4]);
        assert_eq!(r.shortcut.as_deref(), Some("line L2 serves no station"));
    }

    #[test]
    fn json_shape() {
        let r = report(3, 2, &[(1, 2, 1), (2, 3, 2)], &IndexConfig::default());
        let value: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();

        assert_eq!(value["index"], 1);
        assert_eq!(value["shortcut"], "station S2 is on every line");
        assert_eq!(value["links"][0]["via"], 2);
        assert_eq!(value["eccentricities"][1]["line"], 2);
        assert_eq!(value["unused_lines"], serde_json::json!([]));
    }
}
