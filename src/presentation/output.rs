use crate::domain::error::JsontrError;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use std::io;

/// Single-line JSON with `", "` and `": "` separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encode a value as one output line (without the trailing newline).
pub fn to_line(value: &Value) -> Result<String, JsontrError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    String::from_utf8(buf).map_err(|e| JsontrError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
