//! Trip types.
//!
//! A `Trip` is the answer the planner reports: either an open path through
//! the network or a cycle that returns to its first station.

use std::collections::HashSet;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{DomainError, StationId};

/// A validated trip through the network.
///
/// No station appears twice, except that the final station may repeat the
/// first one when the trip closes a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    stations: Vec<StationId>,
    distance: f64,
}

impl Trip {
    /// Creates a trip from its station sequence and total distance.
    pub fn new(stations: Vec<StationId>, distance: f64) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyTrip);
        }

        // A closing station is only legal once the trip has left the start.
        let closes = stations.len() >= 3 && stations[0] == stations[stations.len() - 1];
        let body = if closes {
            &stations[..stations.len() - 1]
        } else {
            &stations[..]
        };

        let mut seen = HashSet::with_capacity(body.len());
        for station in body {
            if !seen.insert(*station) {
                return Err(DomainError::RepeatedStation(*station));
            }
        }

        Ok(Self { stations, distance })
    }

    /// Builds a trip from a path the search recorded.
    ///
    /// The visited markers already rule out repeats, so this only checks
    /// in debug builds.
    pub(crate) fn from_search(stations: Vec<StationId>, distance: f64) -> Self {
        debug_assert!(Trip::new(stations.clone(), distance).is_ok());
        Self { stations, distance }
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Returns the total distance travelled.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the first station.
    pub fn origin(&self) -> StationId {
        self.stations[0]
    }

    /// Returns the last station.
    pub fn destination(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// Number of entries in the station sequence, counting a closing
    /// station separately.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; a trip has at least one station.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of connections travelled.
    pub fn legs(&self) -> usize {
        self.stations.len() - 1
    }

    /// Returns true if the trip ends where it started.
    pub fn is_cycle(&self) -> bool {
        self.stations.len() >= 3 && self.origin() == self.destination()
    }
}

impl Serialize for Trip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Trip", 3)?;
        state.serialize_field("stations", &self.stations)?;
        state.serialize_field("distance", &self.distance)?;
        state.serialize_field("is_cycle", &self.is_cycle())?;
        state.end()
    }
}
