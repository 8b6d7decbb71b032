//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from I/O errors.

use super::StationId;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Trip has no stations
    #[error("trip must have at least one station")]
    EmptyTrip,

    /// A station appears twice somewhere other than closing a cycle
    #[error("station {0} is visited more than once")]
    RepeatedStation(StationId),
}
