//! Transfer counts on the station graph itself.
//!
//! An independent model of the same problem, used to validate the line
//! graph reduction. A search state is a rider standing at a station on a
//! particular line. Riding a connection of the current line costs nothing;
//! changing to another line at the current station costs one transfer.
//! With only 0 and 1 edge weights, a double-ended queue replaces the
//! priority queue of Dijkstra's algorithm (0-1 BFS).
//!
//! Unlike the line graph, this model follows the physical connections of
//! each line. The two agree whenever each line's own connections join all
//! of its stations.

use std::collections::VecDeque;

use tracing::trace;

use crate::domain::{Line, Station};
use crate::index::ConnectivityIndex;
use crate::network::Network;

/// Index of a `(station, line)` state in the flat state table.
type StateId = usize;

/// 0-1 BFS over `(station, line)` states of a network.
pub struct StationSearch<'a> {
    network: &'a Network,
    /// `offsets[s]..offsets[s + 1]` are the states of station `s`, one per
    /// entry of `network.lines_at(s)`.
    offsets: Vec<StateId>,
}

impl<'a> StationSearch<'a> {
    pub fn new(network: &'a Network) -> Self {
        let mut offsets = Vec::with_capacity(network.num_stations() + 1);
        let mut total = 0;
        offsets.push(0);
        for station in network.stations() {
            total += network.lines_at(station).len();
            offsets.push(total);
        }
        Self { network, offsets }
    }

    fn num_states(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    fn state(&self, station: Station, line: Line) -> Option<StateId> {
        self.network
            .lines_at(station)
            .binary_search(&line)
            .ok()
            .map(|i| self.offsets[station.index()] + i)
    }

    fn states_of(&self, station: Station) -> impl Iterator<Item = StateId> + '_ {
        self.offsets[station.index()]..self.offsets[station.index() + 1]
    }

    fn station_of(&self, state: StateId) -> Station {
        // offsets is non-decreasing; the owning station is the last one
        // whose range starts at or before `state`
        Station(self.offsets.partition_point(|&start| start <= state) - 1)
    }

    fn line_of(&self, state: StateId) -> Line {
        let station = self.station_of(state);
        self.network.lines_at(station)[state - self.offsets[station.index()]]
    }

    /// Minimum transfers to every state, starting at cost 0 from `sources`.
    fn search(&self, sources: impl IntoIterator<Item = StateId>) -> Vec<Option<usize>> {
        let mut dist: Vec<Option<usize>> = vec![None; self.num_states()];
        let mut deque: VecDeque<(StateId, usize)> = VecDeque::new();

        for source in sources {
            dist[source] = Some(0);
            deque.push_back((source, 0));
        }

        while let Some((state, changes)) = deque.pop_front() {
            if dist[state].is_some_and(|best| changes > best) {
                continue;
            }

            let station = self.station_of(state);
            let line = self.line_of(state);

            // Stay on the line
            for &(next, next_line) in self.network.neighbours(station) {
                if next_line != line {
                    continue;
                }
                let Some(next_state) = self.state(next, line) else {
                    continue;
                };
                if dist[next_state].is_none_or(|best| changes < best) {
                    dist[next_state] = Some(changes);
                    deque.push_front((next_state, changes));
                }
            }

            // Change line here
            for other in self.states_of(station) {
                if other == state {
                    continue;
                }
                if dist[other].is_none_or(|best| changes + 1 < best) {
                    dist[other] = Some(changes + 1);
                    deque.push_back((other, changes + 1));
                }
            }
        }

        dist
    }

    /// Minimum transfers from `from` to every station, indexed by station.
    ///
    /// A rider may board any line at `from`. Stations that cannot be
    /// reached are `None`; an isolated `from` reaches nothing, not even
    /// itself.
    pub fn transfers_from(&self, from: Station) -> Vec<Option<usize>> {
        let dist = self.search(self.states_of(from));
        self.network
            .stations()
            .map(|station| {
                self.states_of(station)
                    .filter_map(|state| dist[state])
                    .min()
            })
            .collect()
    }

    /// Minimum transfers to get from station `a` to station `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_index::domain::Station;
    /// use transit_index::network::Network;
    /// use transit_index::station_search::StationSearch;
    ///
    /// let network = Network::from_triples(3, 2, &[(1, 2, 1), (2, 3, 2)]).unwrap();
    /// let search = StationSearch::new(&network);
    ///
    /// assert_eq!(search.transfers_between(Station(0), Station(1)), Some(0));
    /// assert_eq!(search.transfers_between(Station(0), Station(2)), Some(1));
    /// ```
    pub fn transfers_between(&self, a: Station, b: Station) -> Option<usize> {
        self.transfers_from(a)[b.index()]
    }

    /// Minimum transfers from riding `source` to riding each line, indexed
    /// by line.
    pub fn line_distances(&self, source: Line) -> Vec<Option<usize>> {
        let sources: Vec<StateId> = self
            .network
            .stations()
            .filter_map(|station| self.state(station, source))
            .collect();
        let dist = self.search(sources);

        let mut by_line: Vec<Option<usize>> = vec![None; self.network.num_lines()];
        for (state, d) in dist.iter().enumerate() {
            let Some(d) = *d else { continue };
            let slot = &mut by_line[self.line_of(state).index()];
            *slot = Some(slot.map_or(d, |best| best.min(d)));
        }
        by_line
    }

    /// The connectivity index computed on the station graph: the largest
    /// line-to-line transfer count, or `Disconnected`.
    pub fn connectivity_index(&self) -> ConnectivityIndex {
        if !self.network.isolated_stations().is_empty() {
            return ConnectivityIndex::Disconnected;
        }

        // Lines cover every station, but a line split into unconnected
        // pieces can still leave stations apart
        if !self.network.station_components().is_connected() {
            return ConnectivityIndex::Disconnected;
        }

        let mut worst = 0;
        for line in self.network.lines() {
            let distances = self.line_distances(line);
            for d in distances {
                match d {
                    Some(d) => worst = worst.max(d),
                    None => return ConnectivityIndex::Disconnected,
                }
            }
            trace!(line = %line, worst, "Station search from line");
        }

        ConnectivityIndex::Transfers(worst)
    }
}
