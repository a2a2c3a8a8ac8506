//! Network builder.

use tracing::trace;

use super::{Network, NetworkError};
use crate::domain::{Connection, Line};

/// Accumulates connections for a network with declared station and line
/// counts, checking each against those bounds.
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    num_stations: usize,
    num_lines: usize,
    connections: Vec<Connection>,
}

impl NetworkBuilder {
    /// Start a network with `num_stations` stations and `num_lines` lines.
    pub fn new(num_stations: usize, num_lines: usize) -> Self {
        Self {
            num_stations,
            num_lines,
            connections: Vec::new(),
        }
    }

    /// Reserve room for `additional` more connections.
    pub fn with_capacity(mut self, additional: usize) -> Self {
        self.connections.reserve(additional);
        self
    }

    /// Add a connection.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either station or the line is outside the declared
    /// counts. The builder is left unchanged in that case.
    pub fn add_connection(&mut self, connection: Connection) -> Result<&mut Self, NetworkError> {
        for station in [connection.from(), connection.to()] {
            if station.index() >= self.num_stations {
                return Err(NetworkError::StationOutOfRange {
                    station,
                    num_stations: self.num_stations,
                });
            }
        }
        if connection.line().index() >= self.num_lines {
            return Err(NetworkError::LineOutOfRange {
                line: connection.line(),
                num_lines: self.num_lines,
            });
        }

        self.connections.push(connection);
        Ok(self)
    }

    /// Build the read-only network: symmetric station adjacency plus the
    /// deduplicated, sorted lines through each station.
    pub fn build(self) -> Network {
        let mut adjacency = vec![Vec::new(); self.num_stations];
        let mut station_lines: Vec<Vec<Line>> = vec![Vec::new(); self.num_stations];

        for connection in &self.connections {
            let (a, b) = connection.endpoints();
            let line = connection.line();
            adjacency[a.index()].push((b, line));
            adjacency[b.index()].push((a, line));
            station_lines[a.index()].push(line);
            station_lines[b.index()].push(line);
        }

        for lines in &mut station_lines {
            lines.sort_unstable();
            lines.dedup();
        }

        trace!(
            stations = self.num_stations,
            lines = self.num_lines,
            connections = self.connections.len(),
            "Built network"
        );

        Network {
            num_lines: self.num_lines,
            adjacency,
            station_lines,
            num_connections: self.connections.len(),
        }
    }
}
