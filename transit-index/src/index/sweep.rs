//! Per-line reachability sweep.
//!
//! A breadth-first search over the line graph from one source line. Every
//! line-graph hop is one line change, so the BFS depth of a line is the
//! minimum number of changes needed to reach it from the source.

use std::collections::VecDeque;

use tracing::trace;

use crate::domain::Line;
use crate::line_graph::LineGraph;

/// Hop distances from one source line to every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSweep {
    distances: Vec<Option<usize>>,
}

impl LineSweep {
    /// Run a BFS from `source` over `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_index::domain::Line;
    /// use transit_index::index::LineSweep;
    /// use transit_index::line_graph::LineGraph;
    /// use transit_index::network::Network;
    ///
    /// // Lines 1 - 2 - 3 in a chain
    /// let network = Network::from_triples(4, 3, &[(1, 2, 1), (2, 3, 2), (3, 4, 3)]).unwrap();
    /// let graph = LineGraph::build(&network);
    ///
    /// let sweep = LineSweep::from_source(&graph, Line(0));
    /// assert_eq!(sweep.distance_to(Line(2)), Some(2));
    /// assert_eq!(sweep.eccentricity(), Some(2));
    /// ```
    pub fn from_source(graph: &LineGraph, source: Line) -> Self {
        let mut distances: Vec<Option<usize>> = vec![None; graph.num_lines()];
        let mut queue: VecDeque<Line> = VecDeque::new();

        distances[source.index()] = Some(0);
        queue.push_back(source);

        while let Some(line) = queue.pop_front() {
            let Some(changes) = distances[line.index()] else {
                continue;
            };
            for next in graph.neighbours(line) {
                if distances[next.index()].is_none() {
                    distances[next.index()] = Some(changes + 1);
                    queue.push_back(next);
                }
            }
        }

        let sweep = Self { distances };
        trace!(
            source = %source,
            reached = sweep.reached(),
            "Swept line graph"
        );
        sweep
    }

    /// Minimum number of changes from the source to `line`, or `None` if
    /// `line` cannot be reached.
    pub fn distance_to(&self, line: Line) -> Option<usize> {
        self.distances[line.index()]
    }

    /// Number of lines reached, including the source.
    pub fn reached(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Lines the sweep could not reach.
    pub fn unreached(&self) -> impl Iterator<Item = Line> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_none())
            .map(|(i, _)| Line(i))
    }

    /// The largest distance to any line, or `None` if some line is
    /// unreachable.
    pub fn eccentricity(&self) -> Option<usize> {
        self.distances
            .iter()
            .try_fold(0, |max, d| d.map(|d| max.max(d)))
    }
}
