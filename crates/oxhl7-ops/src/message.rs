//! A message: an ordered sequence of typed segment instances plus the
//! separators it was read with (or will be written with). Immutable by
//! convention — every edit in [`crate::edit`] takes a `&Message` and
//! returns a new one; nothing here mutates `self`.

use oxhl7_core::Separators;
use oxhl7_schema::SegmentInstance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    pub segments: Vec<SegmentInstance>,
    pub separators: Separators,
}

impl Message {
    pub fn new(separators: Separators) -> Self {
        Self { segments: Vec::new(), separators }
    }

    pub fn from_segments(segments: Vec<SegmentInstance>, separators: Separators) -> Self {
        Self { segments, separators }
    }

    /// Named as its own accessor rather than a bare struct field read, so
    /// callers get a stable entry point regardless of how `SegmentInstance`
    /// stores its ID internally.
    pub fn segment_id(segment: &SegmentInstance) -> &str {
        &segment.id
    }
}
