//! Crate-level error type.
//!
//! The search itself cannot fail; everything here comes from reading the
//! input or writing the result.

use std::io;
use std::path::PathBuf;

use crate::input::InputError;

/// Errors surfaced to the command line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Reading the connection list failed
    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing the plain output failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Writing the JSON output failed
    #[error("failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::Open {
            path: PathBuf::from("lines.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot open lines.csv: no such file");

        let err = Error::Input(InputError::Io(io::Error::other("broken pipe")));
        assert_eq!(err.to_string(), "failed to read input: broken pipe");

        let err = Error::Output(io::Error::other("closed"));
        assert_eq!(err.to_string(), "failed to write output: closed");
    }
}
