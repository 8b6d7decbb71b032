//! Station network built from undirected connections.
//!
//! The network is an adjacency table indexed by station id. Every
//! connection is stored twice, once under each endpoint, so the search can
//! travel it in either direction.

use tracing::debug;

use crate::domain::{Connection, ConnectionId, StationId};

/// One entry in a station's neighbour list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Station at the other end of the connection.
    pub station: StationId,
    /// Length of the connection.
    pub length: f64,
    /// Which input connection this entry came from.
    pub connection: ConnectionId,
}

/// Adjacency structure over stations `0..station_count()`.
///
/// Built once from the input and never modified by the search.
#[derive(Debug, Clone, Default)]
pub struct Network {
    adjacency: Vec<Vec<Neighbour>>,
    connection_count: usize,
    ignored_self_loops: usize,
}

impl Network {
    /// Create an empty network with no stations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from connections in input order.
    ///
    /// The station table is sized to one more than the largest id seen, so
    /// ids that never appear in a usable connection become isolated
    /// stations. Parallel connections are kept as separate entries.
    ///
    /// Self-loops still count towards the table size but are not stored:
    /// the search marks a station visited before looking at its
    /// neighbours, so a loop can neither be travelled nor close a cycle.
    ///
    /// # Example
    ///
    /// ```
    /// use longest_trip::domain::{Connection, StationId};
    /// use longest_trip::network::Network;
    ///
    /// let network = Network::from_connections(&[
    ///     Connection::new(StationId(0), StationId(2), 4.0),
    /// ]);
    /// assert_eq!(network.station_count(), 3);
    /// assert!(network.neighbours(StationId(1)).is_empty());
    /// ```
    pub fn from_connections(connections: &[Connection]) -> Self {
        let station_count = connections
            .iter()
            .map(|c| c.max_station().index() + 1)
            .max()
            .unwrap_or(0);

        let mut network = Self {
            adjacency: vec![Vec::new(); station_count],
            connection_count: 0,
            ignored_self_loops: 0,
        };

        for (idx, connection) in connections.iter().enumerate() {
            network.add(ConnectionId(idx), connection);
        }

        debug!(
            stations = network.station_count(),
            connections = network.connection_count,
            ignored_self_loops = network.ignored_self_loops,
            "Built station network"
        );

        network
    }

    /// Add one connection, stored under both endpoints.
    fn add(&mut self, id: ConnectionId, connection: &Connection) {
        if connection.is_self_loop() {
            debug!(
                station = %connection.from,
                connection = %id,
                "Ignoring self-loop"
            );
            self.ignored_self_loops += 1;
            return;
        }

        self.adjacency[connection.from.index()].push(Neighbour {
            station: connection.to,
            length: connection.length,
            connection: id,
        });
        self.adjacency[connection.to.index()].push(Neighbour {
            station: connection.from,
            length: connection.length,
            connection: id,
        });
        self.connection_count += 1;
    }

    /// Sort every neighbour list by neighbour id, then by connection id.
    ///
    /// After sorting, which of several equally long trips gets reported no
    /// longer depends on the order connections were read in.
    pub fn sort_neighbours(&mut self) {
        for neighbours in &mut self.adjacency {
            neighbours.sort_by_key(|n| (n.station, n.connection));
        }
    }

    /// Number of stations, isolated ones included.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of connections stored (self-loops excluded).
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    /// Number of self-loops that were read but not stored.
    pub fn ignored_self_loops(&self) -> usize {
        self.ignored_self_loops
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbour entries of a station, in insertion order unless sorted.
    ///
    /// # Panics
    ///
    /// Panics if `station` is not below `station_count()`.
    pub fn neighbours(&self, station: StationId) -> &[Neighbour] {
        &self.adjacency[station.index()]
    }

    /// All station ids in ascending order.
    pub fn stations(&self) -> impl Iterator<Item = StationId> {
        (0..self.adjacency.len()).map(StationId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(from: usize, to: usize, length: f64) -> Connection {
        Connection::new(StationId(from), StationId(to), length)
    }

    fn neighbour_ids(network: &Network, station: usize) -> Vec<usize> {
        network
            .neighbours(StationId(station))
            .iter()
            .map(|n| n.station.0)
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_network() {
        let network = Network::from_connections(&[]);
        assert!(network.is_empty());
        assert_eq!(network.station_count(), 0);
        assert_eq!(network.connection_count(), 0);
        assert_eq!(network.stations().count(), 0);
    }

    #[test]
    fn connection_stored_both_ways() {
        let network = Network::from_connections(&[conn(0, 1, 5.0)]);

        assert_eq!(network.station_count(), 2);
        assert_eq!(
            network.neighbours(StationId(0)),
            &[Neighbour {
                station: StationId(1),
                length: 5.0,
                connection: ConnectionId(0),
            }]
        );
        assert_eq!(
            network.neighbours(StationId(1)),
            &[Neighbour {
                station: StationId(0),
                length: 5.0,
                connection: ConnectionId(0),
            }]
        );
    }

    #[test]
    fn sized_by_largest_id() {
        let network = Network::from_connections(&[conn(5, 2, 1.0)]);
        assert_eq!(network.station_count(), 6);
        assert!(network.neighbours(StationId(0)).is_empty());
        assert!(network.neighbours(StationId(4)).is_empty());
        assert_eq!(neighbour_ids(&network, 5), vec![2]);
    }

    #[test]
    fn parallel_connections_kept() {
        let network = Network::from_connections(&[conn(0, 1, 5.0), conn(1, 0, 3.0)]);
        assert_eq!(network.connection_count(), 2);

        let from_zero = network.neighbours(StationId(0));
        assert_eq!(from_zero.len(), 2);
        assert_eq!(from_zero[0].length, 5.0);
        assert_eq!(from_zero[1].length, 3.0);
        assert_ne!(from_zero[0].connection, from_zero[1].connection);
    }

    #[test]
    fn insertion_order_preserved() {
        let network =
            Network::from_connections(&[conn(0, 3, 1.0), conn(0, 1, 1.0), conn(2, 0, 1.0)]);
        assert_eq!(neighbour_ids(&network, 0), vec![3, 1, 2]);
    }

    #[test]
    fn zero_and_negative_lengths_accepted() {
        let network = Network::from_connections(&[conn(0, 1, 0.0), conn(1, 2, -2.5)]);
        assert_eq!(network.connection_count(), 2);
        assert_eq!(network.neighbours(StationId(2))[0].length, -2.5);
    }

    #[test]
    fn self_loop_sizes_table_but_is_not_stored() {
        let network = Network::from_connections(&[conn(0, 1, 1.0), conn(4, 4, 9.0)]);
        assert_eq!(network.station_count(), 5);
        assert_eq!(network.connection_count(), 1);
        assert_eq!(network.ignored_self_loops(), 1);
        assert!(network.neighbours(StationId(4)).is_empty());
    }

    #[test]
    fn sort_neighbours_orders_by_station_then_connection() {
        let mut network = Network::from_connections(&[
            conn(0, 3, 1.0),
            conn(0, 1, 2.0),
            conn(0, 3, 7.0),
            conn(2, 0, 1.0),
        ]);
        network.sort_neighbours();

        assert_eq!(neighbour_ids(&network, 0), vec![1, 2, 3, 3]);
        let to_three: Vec<_> = network.neighbours(StationId(0))[2..]
            .iter()
            .map(|n| n.connection)
            .collect();
        assert_eq!(to_three, vec![ConnectionId(0), ConnectionId(2)]);
    }

    #[test]
    fn stations_ascending() {
        let network = Network::from_connections(&[conn(2, 0, 1.0)]);
        let ids: Vec<_> = network.stations().collect();
        assert_eq!(ids, vec![StationId(0), StationId(1), StationId(2)]);
    }
}
