//! # oxhl7 — HL7 v2.x wire codec and schema-driven message shape
//!
//! A library that reads and writes HL7 v2.x messages in their
//! delimiter-based wire form and exposes a typed, navigable in-memory
//! representation: a sequence of segments with named, typed, possibly
//! repeated fields composed of components and subcomponents.
//!
//! The workspace is one crate per concern:
//!
//! - [`oxhl7_core`] (re-exported as [`core`]) — separators/escape table, the
//!   IR sum types, primitive value kinds, the error taxonomy.
//! - [`oxhl7_codec`] (as [`codec`]) — field/component/subcomponent
//!   decode/encode, escape/unescape.
//! - [`oxhl7_parser`] (as [`parser`]) — the incremental lexer, `Reader`,
//!   `Writer`.
//! - [`oxhl7_schema`] (as [`schema`]) — segment/composite specs, the
//!   segment-IR bridge, `SegmentInstance`.
//! - [`oxhl7_ops`] (as [`ops`]) — `Message` and the message-level
//!   operations: positional lookup, paired-group scanning, reduce, edits,
//!   and the `read`/`write` glue that ties a `Reader`/`Writer` to a schema
//!   registry.
//! - [`oxhl7_mllp`] (as [`mllp`]) — MLLP framing.
//!
//! This crate also carries [`examples`] — segment specs (MSH, PID, PV1, ORC,
//! OBR, OBX, NTE, PR1, AUT) sufficient to exercise the machinery end to end.
//!
//! ## Quick start
//!
//! ```rust
//! use oxhl7::examples;
//! use oxhl7::ops::{self, Outcome};
//! use oxhl7::parser::ReadOptions;
//!
//! let bytes = b"MSH|^~\\&|APP|FAC|||20250115||ADT^A01|MSG001|P|2.5\r\
//!               PID|1||504599||DOE^JOHN||19800101|M\r";
//!
//! let Outcome::Complete(message, _rest) = ops::read(bytes, ReadOptions::default(), examples::registry()) else {
//!     panic!("expected a complete message");
//! };
//! let pid = ops::segment(&message, "PID", 0).unwrap();
//! assert_eq!(pid.value("family_name").unwrap().as_str(), Some("DOE"));
//! ```

pub use oxhl7_codec as codec;
pub use oxhl7_core as core;
pub use oxhl7_mllp as mllp;
pub use oxhl7_ops as ops;
pub use oxhl7_parser as parser;
pub use oxhl7_schema as schema;

pub use oxhl7_core::{Component, ErrorKind, Field, PrimitiveKind, ReadError, Repetition, Separators, Value};
pub use oxhl7_ops::Message;
pub use oxhl7_parser::Dialect;

/// Example segment/composite schemas — not part of the core machinery (the
/// hundreds of real declarations a production deployment needs are out of
/// scope here), but enough to read and write realistic messages against.
pub mod examples;

#[cfg(test)]
mod tests {
    use super::*;
    use oxhl7_ops::Outcome;
    use oxhl7_parser::ReadOptions;

    const SAMPLE: &[u8] =
        b"MSH|^~\\&|APP|FAC|||202501151015||ADT^A01|MSG001|P|2.5\rPID|1||504599||DOE^JOHN||19800101|M\r";

    #[test]
    fn reads_a_realistic_adt_message() {
        let registry = examples::registry();
        let message = match oxhl7_ops::read(SAMPLE, ReadOptions::default(), registry) {
            Outcome::Complete(m, rest) => {
                assert!(rest.is_empty());
                m
            }
            Outcome::Incomplete(_) => panic!("expected complete, got incomplete"),
            Outcome::Err(e) => panic!("expected complete, got error: {e}"),
        };
        let pid = oxhl7_ops::segment(&message, "PID", 0).unwrap();
        assert_eq!(pid.value("family_name").unwrap().as_str(), Some("DOE"));
        assert_eq!(pid.value("given_name").unwrap().as_str(), Some("JOHN"));
        assert_eq!(
            pid.value("date_of_birth"),
            Some(&oxhl7_core::Value::Date(chrono::NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()))
        );
    }

    #[test]
    fn round_trips_through_write() {
        let registry = examples::registry();
        let message = match oxhl7_ops::read(SAMPLE, ReadOptions::default(), registry.clone()) {
            Outcome::Complete(m, _) => m,
            _ => panic!("expected complete"),
        };
        let options = oxhl7_parser::WriteOptions { dialect: Dialect::Wire, trim: true, separators: message.separators };
        let bytes = oxhl7_ops::write(&message, options, &registry).unwrap();
        assert_eq!(bytes, SAMPLE);
    }
}
