//! Input error types.

use std::num::ParseIntError;

use crate::network::NetworkError;

/// Errors from reading a network description.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before a required value
    #[error("missing {what}")]
    MissingValue { what: String },

    /// A token is not a non-negative integer
    #[error("invalid integer {token:?}: {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A station or line count exceeds [`MAX_COUNT`](super::MAX_COUNT)
    #[error("{what} {count} exceeds the limit of {max}")]
    CountTooLarge {
        what: &'static str,
        count: usize,
        max: usize,
    },

    /// More values follow the last declared connection
    #[error("unexpected input after last connection: {token:?}")]
    TrailingInput { token: String },

    /// A connection is out of range or malformed
    #[error("connection {number}: {source}")]
    Connection {
        /// 1-based position in the connection list
        number: usize,
        #[source]
        source: NetworkError,
    },
}
