// Line-oriented JSON writer for status lines.
// Each record is one line, `{"key": "value", ...}` spacing, flushed right away.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::models::StatusLine;

/// Compact JSON with a space after `:` and `,`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Encodes one status line, newline included.
pub fn encode(line: &StatusLine) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    line.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Writes and flushes one status line so incremental readers see complete lines.
pub fn emit<W: Write>(out: &mut W, line: &StatusLine) -> io::Result<()> {
    let bytes = encode(line).map_err(io::Error::other)?;
    out.write_all(&bytes)?;
    out.flush()
}
