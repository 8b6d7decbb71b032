//! Trip output.
//!
//! The plain format is one station id per line in travel order. An empty
//! result prints nothing at all.

use std::io::{self, Write};

use crate::domain::Trip;

/// Line terminator for plain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Whatever the host platform uses.
    #[default]
    Native,
}

impl LineEnding {
    /// Returns the terminator bytes.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native => "\n",
        }
    }
}

/// How to print the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One station id per line.
    #[default]
    Lines,
    /// A JSON document with stations, distance and cycle flag.
    Json,
}

/// Write `trip` one station per line.
pub fn write_trip<W: Write>(
    mut writer: W,
    trip: Option<&Trip>,
    line_ending: LineEnding,
) -> io::Result<()> {
    let Some(trip) = trip else {
        return Ok(());
    };
    let eol = line_ending.as_str();
    for station in trip.stations() {
        write!(writer, "{station}{eol}")?;
    }
    writer.flush()
}

/// Write `trip` as a JSON document followed by a newline.
///
/// An empty result is written as `null`.
pub fn write_trip_json<W: Write>(mut writer: W, trip: Option<&Trip>) -> serde_json::Result<()> {
    serde_json::to_writer(&mut writer, &trip)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)
}
