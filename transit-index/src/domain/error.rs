//! Domain error types.
//!
//! These errors represent malformed identifiers and connections. They are
//! distinct from network-level validation (bounds against declared counts).

use super::Station;

/// Domain-level errors for identifier and connection validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An externally numbered identifier was 0
    #[error("{kind} numbers start at 1, got 0")]
    ZeroIndex { kind: &'static str },

    /// A connection joins a station to itself
    #[error("connection from {0} to itself")]
    SelfLoop(Station),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::ZeroIndex { kind: "station" };
        assert_eq!(err.to_string(), "station numbers start at 1, got 0");

        let err = DomainError::SelfLoop(Station(2));
        assert_eq!(err.to_string(), "connection from S3 to itself");
    }
}
