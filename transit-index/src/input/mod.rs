//! Plain-text network descriptions.
//!
//! The format is whitespace-separated integers: the station count `n`, the
//! connection count `m` and the line count `l`, followed by `m` triples
//! `station station line`. Stations and lines are numbered from 1.
//!
//! ```text
//! 3 2 2
//! 1 2 1
//! 2 3 2
//! ```

mod error;

pub use error::InputError;

use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::domain::Connection;
use crate::network::{Network, NetworkBuilder, NetworkError};

/// Largest station or line count accepted. Both counts size per-station
/// and per-line tables before any connection is read.
pub const MAX_COUNT: usize = 1 << 20;

/// Parse a network description.
///
/// # Errors
///
/// Fails on missing, non-numeric or surplus values, on station or line
/// counts above [`MAX_COUNT`], and on connections that fall outside the
/// declared counts or join a station to itself.
///
/// # Examples
///
/// ```
/// use transit_index::input::parse_network;
///
/// let network = parse_network("3 2 2\n1 2 1\n2 3 2\n").unwrap();
/// assert_eq!(network.num_stations(), 3);
/// assert_eq!(network.num_connections(), 2);
///
/// // Only one of the two declared connections is present
/// assert!(parse_network("3 2 2\n1 2 1\n").is_err());
/// ```
pub fn parse_network(text: &str) -> Result<Network, InputError> {
    let mut tokens = Tokens(text.split_whitespace());

    let num_stations: usize = tokens.next("station count")?;
    let num_connections: usize = tokens.next("connection count")?;
    let num_lines: usize = tokens.next("line count")?;
    check_count("station count", num_stations)?;
    check_count("line count", num_lines)?;

    // Cap the reservation so a bogus count cannot allocate up front
    let mut builder =
        NetworkBuilder::new(num_stations, num_lines).with_capacity(num_connections.min(1 << 16));

    for number in 1..=num_connections {
        let a: u64 = tokens.next_for(number, "first station")?;
        let b: u64 = tokens.next_for(number, "second station")?;
        let line: u64 = tokens.next_for(number, "line")?;

        Connection::from_one_based(a, b, line)
            .map_err(NetworkError::from)
            .and_then(|c| builder.add_connection(c).map(|_| ()))
            .map_err(|source| InputError::Connection { number, source })?;
    }

    if let Some(token) = tokens.0.next() {
        return Err(InputError::TrailingInput {
            token: token.to_string(),
        });
    }

    debug!(
        stations = num_stations,
        connections = num_connections,
        lines = num_lines,
        "Parsed network"
    );
    Ok(builder.build())
}

/// Read and parse a network description from `reader`.
pub fn read_network<R: Read>(mut reader: R) -> Result<Network, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_network(&text)
}

fn check_count(what: &'static str, count: usize) -> Result<(), InputError> {
    if count > MAX_COUNT {
        return Err(InputError::CountTooLarge {
            what,
            count,
            max: MAX_COUNT,
        });
    }
    Ok(())
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next<T>(&mut self, what: &str) -> Result<T, InputError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let token = self.0.next().ok_or_else(|| InputError::MissingValue {
            what: what.to_string(),
        })?;
        token.parse().map_err(|source| InputError::InvalidInteger {
            token: token.to_string(),
            source,
        })
    }

    fn next_for<T>(&mut self, number: usize, what: &str) -> Result<T, InputError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        self.next(&format!("{what} of connection {number}"))
    }
}
