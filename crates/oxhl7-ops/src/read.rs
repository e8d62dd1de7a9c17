//! The top-level `read`: drives an [`oxhl7_parser::Reader`] to completion,
//! then types every raw segment it produced against a [`SegmentRegistry`] to
//! build a [`Message`]. Incremental reads stay incremental all the way
//! through — `Outcome::Incomplete` carries a continuation that resumes
//! exactly where the underlying parser left off, typing happening only once
//! a full message is in hand.

use std::sync::Arc;

use oxhl7_core::{ErrorKind, ReadError};
use oxhl7_parser::{self, RawMessage, ReadOptions};
use oxhl7_schema::{SegmentInstance, SegmentRegistry};

use crate::error::Error;
use crate::message::Message;

fn type_message(raw: RawMessage, registry: &SegmentRegistry) -> std::result::Result<Message, ReadError> {
    let mut segments = Vec::with_capacity(raw.segments.len());
    for raw_segment in &raw.segments {
        let spec = registry
            .get(&raw_segment.id)
            .ok_or_else(|| ReadError::new(ErrorKind::UnknownSegmentId(raw_segment.id.clone())))?;
        segments.push(SegmentInstance::from_raw(raw_segment, spec)?);
    }
    Ok(Message::from_segments(segments, raw.separators))
}

/// Reader continuation: an in-progress parse plus the registry it will type
/// against once a full message is available. `resume` is a pure function of
/// `(self, bytes)` — feeding the same bytes split any way yields the same
/// result.
pub struct Reader {
    inner: oxhl7_parser::Reader,
    registry: Arc<SegmentRegistry>,
}

pub enum Outcome {
    Complete(Message, Vec<u8>),
    Incomplete(Reader),
    Err(Error),
}

impl Reader {
    pub fn new(options: ReadOptions, registry: Arc<SegmentRegistry>) -> Self {
        Self { inner: oxhl7_parser::Reader::new(options), registry }
    }

    pub fn resume(self, bytes: &[u8]) -> Outcome {
        match self.inner.resume(bytes) {
            oxhl7_parser::Outcome::Complete(raw, rest) => match type_message(raw, &self.registry) {
                Ok(message) => Outcome::Complete(message, rest),
                Err(e) => Outcome::Err(e.into()),
            },
            oxhl7_parser::Outcome::Incomplete(inner) => Outcome::Incomplete(Reader { inner, registry: self.registry }),
            oxhl7_parser::Outcome::Err(e) => Outcome::Err(e.into()),
        }
    }
}

pub fn read(bytes: &[u8], options: ReadOptions, registry: Arc<SegmentRegistry>) -> Outcome {
    Reader::new(options, registry).resume(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxhl7_core::PrimitiveKind;
    use oxhl7_schema::{Coordinate, FieldSpec, SegmentSpec};

    fn registry() -> Arc<SegmentRegistry> {
        let msh = SegmentSpec::new().field(9, FieldSpec::new("message_type", Coordinate::Component(1), PrimitiveKind::String, None));
        let pid = SegmentSpec::new().field(3, FieldSpec::new("patient_id", Coordinate::Field, PrimitiveKind::String, None));
        Arc::new(SegmentRegistry::new().register("MSH", msh).register("PID", pid))
    }

    const SAMPLE: &[u8] = b"MSH|^~\\&|APP|FAC|||20250115||ADT^A01|1|P|2.5\rPID|1||504599\r";

    #[test]
    fn reads_and_types_a_whole_message() {
        let message = match read(SAMPLE, ReadOptions::default(), registry()) {
            Outcome::Complete(m, rest) => {
                assert!(rest.is_empty());
                m
            }
            Outcome::Incomplete(_) => panic!("expected complete"),
            Outcome::Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(message.segments.len(), 2);
        assert_eq!(message.segments[0].id, "MSH");
        let pid = &message.segments[1];
        assert_eq!(pid.value("patient_id").unwrap().as_str(), Some("504599"));
    }

    #[test]
    fn unknown_segment_id_is_reported() {
        let bytes = b"MSH|^~\\&|APP|FAC|||20250115||ADT^A01|1|P|2.5\rZZZ|1\r";
        match read(bytes, ReadOptions::default(), registry()) {
            Outcome::Err(_) => {}
            other => panic!("expected error for unregistered segment, got complete/incomplete: {}", matches!(other, Outcome::Complete(..))),
        }
    }

    #[test]
    fn incremental_read_resumes_to_the_same_message() {
        let whole = match read(SAMPLE, ReadOptions::default(), registry()) {
            Outcome::Complete(m, _) => m,
            _ => panic!("expected complete"),
        };
        let (a, b) = SAMPLE.split_at(20);
        let message = match Reader::new(ReadOptions::default(), registry()).resume(a) {
            Outcome::Incomplete(r) => match r.resume(b) {
                Outcome::Complete(m, _) => m,
                _ => panic!("expected complete after resume"),
            },
            other => panic!("expected incomplete at split, got complete/err: {}", matches!(other, Outcome::Complete(..))),
        };
        assert_eq!(message, whole);
    }
}
