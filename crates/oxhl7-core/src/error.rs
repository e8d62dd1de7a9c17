//! Error taxonomy for HL7 v2.x reads.
//!
//! `Incomplete` is deliberately absent here — needing more input is not a
//! failure, it is a third outcome alongside success and error (see
//! `oxhl7_parser::Outcome`). Every variant below is a terminal failure that a
//! reader annotates with the `(segment id, sequence)` it was working on when
//! it happened, plus a byte offset into the input for diagnostics.

use crate::value::PrimitiveKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadError>;

/// The failure itself, without positional context.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErrorKind {
    #[error("segment id does not match the HL7 grammar")]
    BadSegmentId,

    #[error("the five MSH header bytes are not valid delimiter candidates")]
    BadDelimiters,

    #[error("byte 0x{0:02X} after a field's end was neither the field separator nor the segment terminator")]
    BadSeparator(u8),

    #[error("field payload contained a non-printable byte 0x{0:02X}")]
    BadField(u8),

    #[error("value {raw:?} could not be decoded as {kind:?}")]
    BadValue { kind: PrimitiveKind, raw: String },

    #[error("no schema registered for segment id {0:?}")]
    UnknownSegmentId(String),

    #[error("malformed MLLP frame")]
    BadMllpFraming,
}

/// Positional context carried alongside an [`ErrorKind`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub segment_id: Option<String>,
    pub sequence: Option<usize>,
    pub offset: Option<usize>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, id: impl Into<String>) -> Self {
        self.segment_id = Some(id.into());
        self
    }

    pub fn sequence(mut self, seq: usize) -> Self {
        self.sequence = Some(seq);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// A read failure: the reader never retries, it surfaces the first failure
/// it hits annotated with where it was. Edit primitives and the writer never
/// produce this type — only reads fail.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}{}", format_context(.context))]
pub struct ReadError {
    pub kind: ErrorKind,
    pub context: Context,
}

fn format_context(ctx: &Context) -> String {
    let mut parts = Vec::new();
    if let Some(id) = &ctx.segment_id {
        parts.push(format!("segment={id}"));
    }
    if let Some(seq) = ctx.sequence {
        parts.push(format!("sequence={seq}"));
    }
    if let Some(offset) = ctx.offset {
        parts.push(format!("offset={offset}"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl ReadError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, context: Context::new() }
    }

    pub fn with_context(kind: ErrorKind, context: Context) -> Self {
        Self { kind, context }
    }

    pub fn at_segment(kind: ErrorKind, segment_id: impl Into<String>, sequence: usize) -> Self {
        Self::with_context(kind, Context::new().segment(segment_id).sequence(sequence))
    }
}
