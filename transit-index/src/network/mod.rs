//! The station graph.
//!
//! A [`Network`] is built once from a connection list and is read-only
//! afterwards. It records, for each station, the stations one hop away (and
//! the line serving each hop) and the distinct lines passing through it.

mod builder;
mod error;

pub use builder::NetworkBuilder;
pub use error::NetworkError;

use crate::components::{Components, label_components};
use crate::domain::{Connection, Line, Station};

/// A transit network: stations joined by connections, each served by a line.
#[derive(Debug, Clone)]
pub struct Network {
    num_lines: usize,
    /// Per station: `(neighbour, line)` for every incident connection.
    adjacency: Vec<Vec<(Station, Line)>>,
    /// Per station: distinct lines through it, sorted ascending.
    station_lines: Vec<Vec<Line>>,
    num_connections: usize,
}

impl Network {
    /// Build a network from externally numbered (1-based) triples
    /// `(station, station, line)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_index::domain::{Line, Station};
    /// use transit_index::network::Network;
    ///
    /// let network = Network::from_triples(3, 2, &[(1, 2, 1), (2, 3, 2)]).unwrap();
    /// assert_eq!(network.lines_at(Station(1)), &[Line(0), Line(1)]);
    ///
    /// // Station 4 does not exist
    /// assert!(Network::from_triples(3, 2, &[(1, 4, 1)]).is_err());
    /// ```
    pub fn from_triples(
        num_stations: usize,
        num_lines: usize,
        triples: &[(u64, u64, u64)],
    ) -> Result<Self, NetworkError> {
        let mut builder = NetworkBuilder::new(num_stations, num_lines).with_capacity(triples.len());
        for &(a, b, line) in triples {
            builder.add_connection(Connection::from_one_based(a, b, line)?)?;
        }
        Ok(builder.build())
    }

    pub fn num_stations(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_lines(&self) -> usize {
        self.num_lines
    }

    pub fn num_connections(&self) -> usize {
        self.num_connections
    }

    /// All stations, in index order.
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        (0..self.num_stations()).map(Station)
    }

    /// All declared lines, in index order, whether or not they serve a station.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.num_lines).map(Line)
    }

    /// Stations one hop from `station`, with the line serving each hop.
    pub fn neighbours(&self, station: Station) -> &[(Station, Line)] {
        &self.adjacency[station.index()]
    }

    /// Distinct lines through `station`, sorted ascending.
    pub fn lines_at(&self, station: Station) -> &[Line] {
        &self.station_lines[station.index()]
    }

    /// Stations with no connections at all.
    pub fn isolated_stations(&self) -> Vec<Station> {
        self.stations()
            .filter(|&station| self.neighbours(station).is_empty())
            .collect()
    }

    /// Declared lines that serve no station.
    pub fn unused_lines(&self) -> Vec<Line> {
        let mut used = vec![false; self.num_lines];
        for lines in &self.station_lines {
            for line in lines {
                used[line.index()] = true;
            }
        }
        self.lines().filter(|line| !used[line.index()]).collect()
    }

    /// The first station that every declared line passes through, if any.
    ///
    /// When such a station exists, every pair of lines meets there.
    pub fn hub_station(&self) -> Option<Station> {
        if self.num_lines == 0 {
            return None;
        }
        self.stations()
            .find(|&station| self.lines_at(station).len() == self.num_lines)
    }

    /// Connected components of the station graph, ignoring lines.
    pub fn station_components(&self) -> Components {
        let adjacency = &self.adjacency;
        label_components(adjacency.len(), move |u| {
            adjacency[u].iter().map(|(station, _)| station.index())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let network = Network::from_triples(4, 3, &[(1, 2, 1), (2, 3, 2)]).unwrap();
        assert_eq!(network.num_stations(), 4);
        assert_eq!(network.num_lines(), 3);
        assert_eq!(network.num_connections(), 2);
    }

    #[test]
    fn triples_are_normalised_to_zero_based() {
        let network = Network::from_triples(2, 1, &[(1, 2, 1)]).unwrap();
        assert_eq!(network.neighbours(Station(0)), &[(Station(1), Line(0))]);
    }

    #[test]
    fn from_triples_rejects_self_loop() {
        let err = Network::from_triples(2, 1, &[(2, 2, 1)]).unwrap_err();
        assert!(matches!(err, NetworkError::Domain(_)));
    }

    #[test]
    fn from_triples_rejects_out_of_range() {
        assert!(matches!(
            Network::from_triples(2, 1, &[(1, 3, 1)]),
            Err(NetworkError::StationOutOfRange { .. })
        ));
        assert!(matches!(
            Network::from_triples(2, 1, &[(1, 2, 2)]),
            Err(NetworkError::LineOutOfRange { .. })
        ));
    }

    #[test]
    fn isolated_stations() {
        let network = Network::from_triples(3, 1, &[(1, 2, 1)]).unwrap();
        assert_eq!(network.isolated_stations(), vec![Station(2)]);
    }

    #[test]
    fn unused_lines() {
        let network = Network::from_triples(2, 3, &[(1, 2, 2)]).unwrap();
        assert_eq!(network.unused_lines(), vec![Line(0), Line(2)]);
    }

    #[test]
    fn all_lines_used() {
        let network = Network::from_triples(3, 2, &[(1, 2, 1), (2, 3, 2)]).unwrap();
        assert!(network.unused_lines().is_empty());
    }

    #[test]
    fn hub_station_on_every_line() {
        let network = Network::from_triples(4, 3, &[(1, 2, 1), (1, 3, 2), (1, 4, 3)]).unwrap();
        assert_eq!(network.hub_station(), Some(Station(0)));
    }

    #[test]
    fn no_hub_station() {
        let network = Network::from_triples(4, 3, &[(1, 2, 1), (2, 3, 2), (3, 4, 3)]).unwrap();
        assert_eq!(network.hub_station(), None);
    }

    #[test]
    fn no_hub_without_lines() {
        let network = Network::from_triples(1, 0, &[]).unwrap();
        assert_eq!(network.hub_station(), None);
    }

    #[test]
    fn station_components() {
        let network = Network::from_triples(4, 2, &[(1, 2, 1), (3, 4, 2)]).unwrap();
        let components = network.station_components();
        assert_eq!(components.count(), 2);
    }
}
