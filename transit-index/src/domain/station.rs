//! Station identifier type.

use std::fmt;

use super::DomainError;

/// A station in the transit network.
///
/// Stations are numbered from 1 in the external representation and from 0
/// internally. A `Station` always holds the internal, 0-based index so it can
/// be used directly to index per-station tables.
///
/// # Examples
///
/// ```
/// use transit_index::domain::Station;
///
/// let s = Station::from_one_based(3).unwrap();
/// assert_eq!(s.index(), 2);
/// assert_eq!(s.one_based(), 3);
/// assert_eq!(s.to_string(), "S3");
///
/// // Station numbers start at 1
/// assert!(Station::from_one_based(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Station(pub usize);

impl Station {
    /// Convert an externally numbered (1-based) station.
    pub fn from_one_based(n: u64) -> Result<Self, DomainError> {
        match n.checked_sub(1) {
            Some(index) => Ok(Station(index as usize)),
            None => Err(DomainError::ZeroIndex { kind: "station" }),
        }
    }

    /// The 0-based index.
    pub fn index(self) -> usize {
        self.0
    }

    /// The 1-based number used in input and output.
    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.one_based())
    }
}
