//! Domain types for the transit network.
//!
//! This module contains the identifier and connection types every other
//! module builds on. Types enforce their invariants at construction time, so
//! code that receives them can trust their validity.

mod connection;
mod error;
mod line;
mod station;

pub use connection::Connection;
pub use error::DomainError;
pub use line::Line;
pub use station::Station;
