//! The `Message` type and the message-level operations built on top of it:
//! positional lookup, paired-segment scanning, reduce, and the edit
//! primitives. Also owns the `read`/`write` glue that drives an
//! `oxhl7-parser` `Reader`/`Writer` against an `oxhl7-schema` registry to
//! produce and consume a typed [`Message`].

pub mod edit;
pub mod error;
pub mod message;
pub mod query;
pub mod read;
pub mod write;

pub use edit::{delete, insert_after, insert_before, replace, Segments};
pub use error::{Error, Result};
pub use message::Message;
pub use query::{paired_segments, reduce_paired_segments, segment, segment_count};
pub use read::{read, Outcome, Reader};
pub use write::write;
