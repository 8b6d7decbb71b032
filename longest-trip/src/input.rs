//! Connection list reader.
//!
//! Input is a sequence of `start,end,length` triples. Whitespace may appear
//! around the commas and between triples. Reading stops quietly at the
//! first triple that does not parse; everything before it is kept.

use std::io::Read;

use tracing::{debug, warn};

use crate::domain::{Connection, StationId};

/// Longest excerpt of the offending text kept in a [`Truncation`].
const EXCERPT_LEN: usize = 32;

/// Errors that can occur while reading connections.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The underlying reader failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Where and why reading stopped before the end of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Byte offset of the first malformed triple.
    pub offset: usize,
    /// 1-based line of the first malformed triple.
    pub line: usize,
    /// Start of the malformed text, up to the end of its line.
    pub excerpt: String,
}

/// Connections read from the input.
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    /// Connections in input order.
    pub connections: Vec<Connection>,
    /// Set if reading stopped at a malformed triple.
    pub truncated: Option<Truncation>,
}

/// Read all connections from `reader`.
///
/// Only I/O failures are errors; malformed text ends the input early.
pub fn read_connections<R: Read>(mut reader: R) -> Result<ParsedInput, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_bytes(&bytes))
}

/// Parse connections from text.
///
/// # Example
///
/// ```
/// use longest_trip::input::parse_connections;
///
/// let parsed = parse_connections("0, 1, 2.5\n1,2,4\noops\n3,4,1");
/// assert_eq!(parsed.connections.len(), 2);
/// assert_eq!(parsed.truncated.unwrap().line, 3);
/// ```
pub fn parse_connections(text: &str) -> ParsedInput {
    parse_bytes(text.as_bytes())
}

fn parse_bytes(bytes: &[u8]) -> ParsedInput {
    let mut cursor = Cursor { bytes, pos: 0 };
    let mut parsed = ParsedInput::default();

    loop {
        cursor.skip_whitespace();
        if cursor.at_end() {
            break;
        }

        let triple_start = cursor.pos;
        match cursor.connection() {
            Some(connection) => parsed.connections.push(connection),
            None => {
                let truncation = cursor.truncation_at(triple_start);
                warn!(
                    line = truncation.line,
                    offset = truncation.offset,
                    excerpt = %truncation.excerpt,
                    kept = parsed.connections.len(),
                    "Malformed connection, ignoring the rest of the input"
                );
                parsed.truncated = Some(truncation);
                break;
            }
        }
    }

    debug!(connections = parsed.connections.len(), "Read connections");
    parsed
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Take the longest run of bytes matching `accept`.
    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> &str {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
        // Only ASCII bytes are ever accepted
        std::str::from_utf8(&self.bytes[start..self.pos]).unwrap_or_default()
    }

    fn comma(&mut self) -> Option<()> {
        self.skip_whitespace();
        if self.peek() != Some(b',') {
            return None;
        }
        self.pos += 1;
        self.skip_whitespace();
        Some(())
    }

    fn station(&mut self) -> Option<StationId> {
        let sign = usize::from(matches!(self.peek(), Some(b'+' | b'-')));
        let start = self.pos;
        self.pos += sign;
        self.take_while(|b| b.is_ascii_digit());
        let token = std::str::from_utf8(&self.bytes[start..self.pos]).ok()?;
        StationId::parse(token).ok()
    }

    /// Take the longest prefix that reads as a float, like `%lf` does.
    fn length(&mut self) -> Option<f64> {
        let start = self.pos;
        let candidate =
            self.take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'));

        let (len, value) = (1..=candidate.len())
            .rev()
            .find_map(|len| candidate[..len].parse::<f64>().ok().map(|v| (len, v)))?;

        self.pos = start + len;
        Some(value)
    }

    fn connection(&mut self) -> Option<Connection> {
        let from = self.station()?;
        self.comma()?;
        let to = self.station()?;
        self.comma()?;
        let length = self.length()?;
        Some(Connection::new(from, to, length))
    }

    fn truncation_at(&self, offset: usize) -> Truncation {
        let before = &self.bytes[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;

        let rest = &self.bytes[offset..];
        let line_end = rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(rest.len());
        let excerpt = String::from_utf8_lossy(&rest[..line_end.min(EXCERPT_LEN)]).into_owned();

        Truncation {
            offset,
            line,
            excerpt,
        }
    }
}
