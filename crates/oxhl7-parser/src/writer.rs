//! The inverse of [`crate::reader`]: turns a [`RawMessage`] back into wire
//! bytes, honoring the same trim policy and the same `MSH` special case.

use oxhl7_core::{Field, PrimitiveKind, ReadError, Separators};
use oxhl7_codec::encode_field;

use crate::dialect::Dialect;
use crate::reader::{RawMessage, RawSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub dialect: Dialect,
    pub trim: bool,
    pub separators: Separators,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { dialect: Dialect::Wire, trim: true, separators: Separators::default() }
    }
}

/// Stateful wire-format accumulator. One [`Writer`] builds one message.
pub struct Writer {
    seps: Separators,
    trim: bool,
    terminator: u8,
    buf: Vec<u8>,
}

impl Writer {
    pub fn new(options: WriteOptions) -> Self {
        Self { seps: options.separators, trim: options.trim, terminator: options.dialect.terminator(), buf: Vec::new() }
    }

    pub fn start_message(&mut self) {
        self.buf.clear();
    }

    pub fn end_message(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    /// Writes the 3-byte segment ID. For `MSH`, also writes the literal
    /// field separator and the literal encoding-characters field directly —
    /// these two never go through the codec, the same way the reader never
    /// decodes them structurally.
    pub fn start_segment(&mut self, id: &str) {
        self.buf.extend_from_slice(id.as_bytes());
        if id == "MSH" {
            self.buf.push(self.seps.field);
            self.buf.extend_from_slice(&self.seps.encoding_characters());
        }
    }

    pub fn put_field(&mut self, field: &Field) -> Result<(), ReadError> {
        self.buf.push(self.seps.field);
        let encoded = encode_field(field, &self.seps, self.trim, PrimitiveKind::String)?;
        self.buf.extend_from_slice(&encoded);
        Ok(())
    }

    /// Escape hatch for callers holding pre-escaped bytes they don't want
    /// run back through the codec (e.g. forwarding an unparsed field
    /// verbatim).
    pub fn write_raw_field(&mut self, bytes: &[u8]) {
        self.buf.push(self.seps.field);
        self.buf.extend_from_slice(bytes);
    }

    pub fn end_segment(&mut self) {
        if self.trim {
            while self.buf.last() == Some(&self.seps.field) {
                self.buf.pop();
            }
        }
        self.buf.push(self.terminator);
    }
}

fn write_segment(writer: &mut Writer, segment: &RawSegment) -> Result<(), ReadError> {
    writer.start_segment(&segment.id);
    let skip = if segment.id == "MSH" { 2 } else { 0 };
    for field in segment.fields.iter().skip(skip) {
        writer.put_field(field)?;
    }
    writer.end_segment();
    Ok(())
}

pub fn write(message: &RawMessage, options: WriteOptions) -> Result<Vec<u8>, ReadError> {
    let mut writer = Writer::new(WriteOptions { separators: message.separators, ..options });
    writer.start_message();
    for segment in &message.segments {
        write_segment(&mut writer, segment)?;
    }
    Ok(writer.end_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{read, ReadOptions};

    const SAMPLE: &[u8] =
        b"MSH|^~\\&|CLIENTHL7|CLI01020304|SERVHL7|PREPAGA^112233^IIN|20120201101155||ZQA^Z02^ZQA_Z02|00XX20120201101155|P|2.4|||ER|SU|ARG\r";

    #[test]
    fn msh_round_trip() {
        let message = match read(SAMPLE, ReadOptions::default()) {
            crate::reader::Outcome::Complete(m, _) => m,
            _ => panic!("expected complete read"),
        };
        let options = WriteOptions { dialect: Dialect::Wire, trim: true, separators: message.separators };
        let bytes = write(&message, options).unwrap();
        assert_eq!(bytes, SAMPLE);
    }

    #[test]
    fn trim_elision_example_round_trips_through_writer() {
        let seps = Separators::default();
        let field = oxhl7_codec::decode_field(b"504599^223344&&IIN&^~", &seps, true, PrimitiveKind::String).unwrap();
        let mut writer = Writer::new(WriteOptions { separators: seps, ..WriteOptions::default() });
        writer.start_segment("PID");
        writer.put_field(&field).unwrap();
        writer.end_segment();
        let out = writer.end_message();
        assert_eq!(out, b"PID|504599^223344&&IIN\r");
    }
}
