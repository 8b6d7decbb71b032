//! End-to-end pipeline: read connections, build the network, search, print.

use std::io::{Read, Write};

use tracing::info;

use crate::domain::Trip;
use crate::error::Error;
use crate::input::{Truncation, read_connections};
use crate::network::Network;
use crate::output::{LineEnding, OutputFormat, write_trip, write_trip_json};
use crate::planner::{SearchConfig, find_longest_trip};

/// Outcome of planning over one input.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Longest trip, or `None` for an empty network.
    pub trip: Option<Trip>,
    /// Stations in the network, isolated ones included.
    pub stations: usize,
    /// Connections used to build the network.
    pub connections: usize,
    /// Set if the input stopped early at a malformed triple.
    pub truncated: Option<Truncation>,
    /// Simple paths the search explored.
    pub paths_explored: usize,
}

/// Read connections from `reader` and find the longest trip.
pub fn plan<R: Read>(reader: R, config: &SearchConfig) -> Result<Plan, Error> {
    let parsed = read_connections(reader)?;
    let network = Network::from_connections(&parsed.connections);
    let result = find_longest_trip(&network, config);

    info!(
        stations = network.station_count(),
        connections = network.connection_count(),
        paths_explored = result.paths_explored,
        distance = ?result.trip.as_ref().map(Trip::distance),
        "Planned longest trip"
    );

    Ok(Plan {
        trip: result.trip,
        stations: network.station_count(),
        connections: network.connection_count(),
        truncated: parsed.truncated,
        paths_explored: result.paths_explored,
    })
}

/// Print the planned trip in the requested format.
pub fn emit<W: Write>(
    writer: W,
    plan: &Plan,
    format: OutputFormat,
    line_ending: LineEnding,
) -> Result<(), Error> {
    match format {
        OutputFormat::Lines => write_trip(writer, plan.trip.as_ref(), line_ending)?,
        OutputFormat::Json => write_trip_json(writer, plan.trip.as_ref())?,
    }
    Ok(())
}
