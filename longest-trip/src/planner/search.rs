//! Exhaustive backtracking search for the longest trip.
//!
//! Every station is tried as a starting point. From each start the search
//! walks every simple path depth-first, and at every station it checks
//! whether stopping there, or returning directly to the start, beats the
//! best trip recorded so far.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::domain::{ConnectionId, StationId, Trip};
use crate::network::Network;

use super::config::SearchConfig;

/// Distance of an empty record. Lower than any real trip, so the first
/// station visited always replaces it.
const NO_DISTANCE: f64 = -1.0;

/// The longest trip found so far.
///
/// Passed by `&mut` through the whole sweep and only ever replaced by a
/// strictly longer trip, so among equally long trips the first one found
/// is kept.
#[derive(Debug, Clone)]
pub struct BestTrip {
    distance: f64,
    stations: Vec<StationId>,
    improvements: usize,
}

impl BestTrip {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty record able to hold `capacity` stations without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            distance: NO_DISTANCE,
            stations: Vec::with_capacity(capacity),
            improvements: 0,
        }
    }

    /// Best distance recorded, or `None` if nothing has been recorded.
    pub fn distance(&self) -> Option<f64> {
        (!self.stations.is_empty()).then_some(self.distance)
    }

    /// Stations of the best trip, empty if nothing has been recorded.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Number of times the record was replaced.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Record `path` as an open trip if it is strictly longer.
    ///
    /// Returns true if the record was replaced.
    pub fn offer_path(&mut self, path: &[StationId], distance: f64) -> bool {
        // NaN never improves
        if distance.partial_cmp(&self.distance) != Some(Ordering::Greater) {
            return false;
        }
        self.distance = distance;
        self.stations.clear();
        self.stations.extend_from_slice(path);
        self.improvements += 1;
        true
    }

    /// Record `path` closed back to its first station if it is strictly
    /// longer. `distance` must include the closing connection.
    ///
    /// Returns true if the record was replaced.
    pub fn offer_cycle(&mut self, path: &[StationId], distance: f64) -> bool {
        let Some(&start) = path.first() else {
            return false;
        };
        if !self.offer_path(path, distance) {
            return false;
        }
        self.stations.push(start);
        true
    }

    /// Convert the record into a trip, if anything was recorded.
    pub fn into_trip(self) -> Option<Trip> {
        if self.stations.is_empty() {
            return None;
        }
        Some(Trip::from_search(self.stations, self.distance))
    }
}

impl Default for BestTrip {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a full search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Longest trip found, or `None` for a network without stations.
    pub trip: Option<Trip>,

    /// Number of simple paths explored across all starting stations.
    pub paths_explored: usize,

    /// Number of times a longer trip replaced the best one.
    pub improvements: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            trip: None,
            paths_explored: 0,
            improvements: 0,
        }
    }
}

/// Backtracking search over one network.
///
/// Owns the per-station visited markers and the path stack. Both are sized
/// to the station count up front and return to their empty state after
/// every starting station, so the recursion itself never allocates.
pub struct LongestTripSearch<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
    visited: Vec<bool>,
    path: Vec<StationId>,
    paths_explored: usize,
}

impl<'a> LongestTripSearch<'a> {
    /// Create a search over `network`.
    ///
    /// Neighbours are tried in the order the network stores them;
    /// `config.sort_neighbours` is applied by [`find_longest_trip`].
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        let stations = network.station_count();
        Self {
            network,
            config,
            visited: vec![false; stations],
            path: Vec::with_capacity(stations),
            paths_explored: 0,
        }
    }

    /// Search from every station in ascending id order.
    pub fn run(&mut self) -> SearchResult {
        if self.network.is_empty() {
            return SearchResult::empty();
        }

        let mut best = BestTrip::with_capacity(self.network.station_count() + 1);
        let network = self.network;

        for start in network.stations() {
            self.search_from(start, &mut best);
        }

        let improvements = best.improvements();
        let trip = best.into_trip();

        debug!(
            stations = network.station_count(),
            paths_explored = self.paths_explored,
            improvements,
            distance = ?trip.as_ref().map(Trip::distance),
            "Longest trip search complete"
        );

        SearchResult {
            trip,
            paths_explored: self.paths_explored,
            improvements,
        }
    }

    /// Explore every simple path starting at `start`, updating `best`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a station of the network.
    pub fn search_from(&mut self, start: StationId, best: &mut BestTrip) {
        let explored_before = self.paths_explored;

        self.visit(start, start, None, 0.0, best);

        trace!(
            start = %start,
            paths = self.paths_explored - explored_before,
            best_distance = ?best.distance(),
            "Finished starting station"
        );
    }

    fn visit(
        &mut self,
        start: StationId,
        current: StationId,
        arrived_via: Option<ConnectionId>,
        distance: f64,
        best: &mut BestTrip,
    ) {
        let network = self.network;

        self.visited[current.index()] = true;
        self.path.push(current);
        self.paths_explored += 1;

        // Stop here
        best.offer_path(&self.path, distance);

        // Or return straight to the start
        if self.path.len() > 1 {
            for neighbour in network.neighbours(current) {
                if neighbour.station != start {
                    continue;
                }
                if !self.config.allow_retrace && Some(neighbour.connection) == arrived_via {
                    continue;
                }
                best.offer_cycle(&self.path, distance + neighbour.length);
            }
        }

        for neighbour in network.neighbours(current) {
            if self.visited[neighbour.station.index()] {
                continue;
            }
            self.visit(
                start,
                neighbour.station,
                Some(neighbour.connection),
                distance + neighbour.length,
                best,
            );
        }

        self.path.pop();
        self.visited[current.index()] = false;
    }
}

/// Find the longest trip in `network`.
///
/// # Example
///
/// ```
/// use longest_trip::domain::{Connection, StationId};
/// use longest_trip::network::Network;
/// use longest_trip::planner::{SearchConfig, find_longest_trip};
///
/// let network = Network::from_connections(&[
///     Connection::new(StationId(0), StationId(1), 1.0),
///     Connection::new(StationId(1), StationId(2), 1.0),
///     Connection::new(StationId(2), StationId(0), 1.0),
/// ]);
/// let result = find_longest_trip(&network, &SearchConfig::default());
/// let trip = result.trip.unwrap();
///
/// assert!(trip.is_cycle());
/// assert_eq!(trip.distance(), 3.0);
/// ```
pub fn find_longest_trip(network: &Network, config: &SearchConfig) -> SearchResult {
    if config.sort_neighbours {
        let mut sorted = network.clone();
        sorted.sort_neighbours();
        return LongestTripSearch::new(&sorted, config).run();
    }
    LongestTripSearch::new(network, config).run()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
