//! Domain types for the longest-trip planner.
//!
//! This module contains the value types shared by the graph builder, the
//! search and the I/O layers. Types that carry an invariant enforce it at
//! construction time.

mod connection;
mod error;
mod station;
mod trip;

pub use connection::{Connection, ConnectionId};
pub use error::DomainError;
pub use station::{InvalidStationId, StationId};
pub use trip::Trip;
