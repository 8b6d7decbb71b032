//! Connections between stations.

use std::fmt;

use super::StationId;

/// Position of a connection in the input, counted from zero.
///
/// Parallel connections between the same pair of stations share endpoints
/// but never an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectionId(pub usize);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An undirected, weighted connection between two stations.
///
/// Lengths are taken as given; zero and negative values are not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    pub length: f64,
}

impl Connection {
    /// Creates a connection between two stations.
    pub fn new(from: StationId, to: StationId, length: f64) -> Self {
        Self { from, to, length }
    }

    /// Returns true if both ends are the same station.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns the larger of the two endpoint ids.
    pub fn max_station(&self) -> StationId {
        self.from.max(self.to)
    }
}
