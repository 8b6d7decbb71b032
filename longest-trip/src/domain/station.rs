//! Station identifier types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station number in `0..n`.
///
/// Station ids index directly into the per-station tables of a
/// [`Network`](crate::network::Network), so they are plain `usize` values.
///
/// # Examples
///
/// ```
/// use longest_trip::domain::StationId;
///
/// let s = StationId::parse("42").unwrap();
/// assert_eq!(s, StationId(42));
///
/// // Negative ids are rejected
/// assert!(StationId::parse("-1").is_err());
///
/// // So is anything that is not a number
/// assert!(StationId::parse("4x").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl StationId {
    /// Largest id accepted by [`StationId::parse`].
    ///
    /// Ids size the per-station tables, so anything past a signed 32-bit
    /// int is treated as malformed rather than as a table size.
    pub const MAX: StationId = StationId(i32::MAX as usize);

    /// Parse a station id from decimal text.
    ///
    /// A single leading `+` is accepted, as `scanf`-style readers do.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let digits = s.strip_prefix('+').unwrap_or(s);

        if digits.is_empty() {
            return Err(InvalidStationId {
                reason: "must contain at least one digit",
            });
        }
        if digits.starts_with('-') {
            return Err(InvalidStationId {
                reason: "must not be negative",
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationId {
                reason: "must be decimal digits",
            });
        }

        digits
            .parse::<usize>()
            .ok()
            .filter(|&id| id <= Self::MAX.0)
            .map(StationId)
            .ok_or(InvalidStationId {
                reason: "out of range",
            })
    }

    /// Returns the id as a table index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
