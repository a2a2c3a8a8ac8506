//! Line identifier type.

use std::fmt;

use super::DomainError;

/// A transit line: a named service through a set of stations.
///
/// Like [`Station`](super::Station), a `Line` holds its 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub usize);

impl Line {
    /// Convert an externally numbered (1-based) line.
    pub fn from_one_based(n: u64) -> Result<Self, DomainError> {
        match n.checked_sub(1) {
            Some(index) => Ok(Line(index as usize)),
            None => Err(DomainError::ZeroIndex { kind: "line" }),
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

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion() {
        assert_eq!(Line::from_one_based(1).unwrap(), Line(0));
        assert_eq!(Line::from_one_based(7).unwrap().index(), 6);
    }

    #[test]
    fn reject_zero() {
        assert_eq!(
            Line::from_one_based(0).unwrap_err(),
            DomainError::ZeroIndex { kind: "line" }
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Line(1)), "L2");
    }
}
