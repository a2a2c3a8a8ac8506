//! Connection type.
//!
//! A `Connection` is one undirected hop between two stations, served by a
//! single line.

use super::{DomainError, Line, Station};

/// A direct, undirected hop between two distinct stations on one line.
///
/// # Invariants
///
/// - `from != to` (no self-loops)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    from: Station,
    to: Station,
    line: Line,
}

impl Connection {
    /// Construct a connection, rejecting self-loops.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_index::domain::{Connection, Line, Station};
    ///
    /// let c = Connection::new(Station(0), Station(1), Line(0)).unwrap();
    /// assert_eq!(c.endpoints(), (Station(0), Station(1)));
    ///
    /// assert!(Connection::new(Station(2), Station(2), Line(0)).is_err());
    /// ```
    pub fn new(from: Station, to: Station, line: Line) -> Result<Self, DomainError> {
        if from == to {
            return Err(DomainError::SelfLoop(from));
        }
        Ok(Self { from, to, line })
    }

    /// Parse a connection from its external 1-based triple.
    pub fn from_one_based(from: u64, to: u64, line: u64) -> Result<Self, DomainError> {
        Self::new(
            Station::from_one_based(from)?,
            Station::from_one_based(to)?,
            Line::from_one_based(line)?,
        )
    }

    /// Both endpoints, in the order given at construction.
    pub fn endpoints(&self) -> (Station, Station) {
        (self.from, self.to)
    }

    pub fn from(&self) -> Station {
        self.from
    }

    pub fn to(&self) -> Station {
        self.to
    }

    pub fn line(&self) -> Line {
        self.line
    }
}
