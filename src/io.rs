//! Reading and writing point files.
//!
//! A point file is plain text, one point per line: `<x> <y>`, optionally
//! followed by trailing whitespace. Lines that don't match this grammar are
//! skipped rather than rejected, so a file can carry comments or headers.
//! The reader tries a fixed chain of encodings against the raw bytes before
//! giving up, since point files in the wild arrive in whatever the exporting
//! tool's locale happened to be.

use std::io::Write as _;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use regex::Regex;

use crate::error::{EngineError, Result};
use crate::point::Point;

/// Encodings tried in order until one decodes `bytes` without replacement
/// characters. `UTF_8` covers both UTF-8 and strict US-ASCII inputs (ASCII
/// is a UTF-8 subset). `WINDOWS_1252` stands in for ISO-8859-1: the Encoding
/// Standard maps the `iso-8859-1` label onto `windows-1252` since they agree
/// on every byte a point file would ever contain. `WINDOWS_1252` has to come
/// last: it assigns a printable character to every byte value, so it never
/// reports an error and would otherwise shadow the UTF-16 variants before
/// they ever got tried.
const ENCODING_CHAIN: &[&Encoding] = &[UTF_8, UTF_16LE, UTF_16BE, WINDOWS_1252];

/// Decodes `bytes`, honoring a leading BOM if present, otherwise trying
/// each of [`ENCODING_CHAIN`] in order until one round-trips without
/// replacement characters.
///
/// Fails with a `PreconditionError` if no supported encoding can decode
/// `bytes` cleanly.
fn decode(bytes: &[u8]) -> Result<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _, had_errors) = encoding.decode(&bytes[bom_len..]);
        if !had_errors {
            return Ok(text.into_owned());
        }
    }

    for encoding in ENCODING_CHAIN {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return Ok(text.into_owned());
        }
    }

    Err(EngineError::precondition(
        "point file is not legible under any supported encoding",
    ))
}

/// `^(-?\d+) (-?\d+)\s*$`: two integers separated by a single space, then
/// nothing but trailing whitespace.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(-?\d+) (-?\d+)\s*$").unwrap());

/// Matches one line against [`LINE_PATTERN`]. Returns `None` rather than
/// erroring on a non-matching line, since such a line is meant to be
/// skipped, not treated as malformed input.
fn parse_line(line: &str) -> Option<Point> {
    let captures = LINE_PATTERN.captures(line)?;
    let x: i32 = captures[1].parse().ok()?;
    let y: i32 = captures[2].parse().ok()?;
    Some(Point::new(x, y))
}

/// Reads every `<x> <y>` line out of `bytes`, skipping anything else.
///
/// Fails only if `bytes` is legible under none of the supported encodings;
/// a line that merely fails the `<x> <y>` grammar is skipped, not an error.
pub fn read_points(bytes: &[u8]) -> Result<Vec<Point>> {
    let text = decode(bytes)?;
    Ok(text.lines().filter_map(parse_line).collect())
}

/// Renders `points` as UTF-8 text, one `"<x> <y>"` line per point.
pub fn write_points(points: &[Point]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(points.len() * 8);
    for point in points {
        writeln!(out, "{point}").map_err(|e| EngineError::invariant(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_well_formed_utf8_lines() {
        let bytes = b"0 0\n10 20\n-5 -5\n";
        assert_eq!(
            read_points(bytes).unwrap(),
            vec![Point::new(0, 0), Point::new(10, 20), Point::new(-5, -5)]
        );
    }

    #[test]
    fn skips_non_matching_lines() {
        let bytes = b"# a comment\n1 2\nnot a point\n3 4\n\n";
        assert_eq!(
            read_points(bytes).unwrap(),
            vec![Point::new(1, 2), Point::new(3, 4)]
        );
    }

    #[test]
    fn tolerates_trailing_whitespace_but_not_trailing_content() {
        let bytes = b"1 2   \n3 4 ignored-trailer\n5 6\n";
        assert_eq!(
            read_points(bytes).unwrap(),
            vec![Point::new(1, 2), Point::new(5, 6)]
        );
    }

    #[test]
    fn write_then_read_round_trips() {
        let points = vec![Point::new(0, 0), Point::new(-3, 7), Point::new(100, -100)];
        let bytes = write_points(&points).unwrap();
        assert_eq!(read_points(&bytes).unwrap(), points);
    }

    #[test]
    fn decodes_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for ch in "1 2\n".encode_utf16() {
            bytes.extend_from_slice(&ch.to_le_bytes());
        }
        assert_eq!(read_points(&bytes).unwrap(), vec![Point::new(1, 2)]);
    }
}
