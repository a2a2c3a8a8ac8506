//! Network generators shared by the property tests.

use proptest::prelude::*;

use crate::network::Network;

/// A 1-based `(station, station, line)` connection list with its counts.
#[derive(Debug, Clone)]
pub struct NetworkSpec {
    pub num_stations: usize,
    pub num_lines: usize,
    pub triples: Vec<(u64, u64, u64)>,
}

impl NetworkSpec {
    pub fn build(&self) -> Network {
        Network::from_triples(self.num_stations, self.num_lines, &self.triples).unwrap()
    }

    /// The same network with the connection at `index` removed.
    pub fn without(&self, index: usize) -> NetworkSpec {
        let mut triples = self.triples.clone();
        triples.remove(index);
        NetworkSpec {
            num_stations: self.num_stations,
            num_lines: self.num_lines,
            triples,
        }
    }
}

/// Arbitrary small networks: any stations, any lines, possibly isolated
/// stations, unused lines and split lines.
pub fn any_network() -> impl Strategy<Value = NetworkSpec> {
    (2usize..8, 1usize..5).prop_flat_map(|(n, l)| {
        let triple = (1..=n as u64, 1..=n as u64, 1..=l as u64).prop_map(move |(a, b, line)| {
            // Redirect self-loops to the next station
            let b = if a == b { a % n as u64 + 1 } else { b };
            (a, b, line)
        });
        proptest::collection::vec(triple, 0..14).prop_map(move |triples| NetworkSpec {
            num_stations: n,
            num_lines: l,
            triples,
        })
    })
}

/// Networks where every line is a simple path through 2 to 4 stations, so
/// each line's own connections join all of its stations.
pub fn path_line_network() -> impl Strategy<Value = NetworkSpec> {
    (3usize..9, 1usize..6).prop_flat_map(|(n, l)| {
        let stations: Vec<u64> = (1..=n as u64).collect();
        let route = proptest::sample::subsequence(stations, 2..=4.min(n)).prop_shuffle();
        proptest::collection::vec(route, l).prop_map(move |routes| {
            let triples = routes
                .iter()
                .enumerate()
                .flat_map(|(line, route)| {
                    route
                        .windows(2)
                        .map(move |pair| (pair[0], pair[1], line as u64 + 1))
                })
                .collect();
            NetworkSpec {
                num_stations: n,
                num_lines: l,
                triples,
            }
        })
    })
}
