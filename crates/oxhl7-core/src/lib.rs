//! Foundational types shared by every other `oxhl7-*` crate: the delimiter
//! hierarchy, the IR sum types that sit between wire bytes and schema-typed
//! access, the closed set of primitive value kinds, and the error taxonomy
//! that every reader in this workspace reports through.

pub mod error;
pub mod ir;
pub mod separators;
pub mod value;

pub use error::{Context, ErrorKind, ReadError, Result};
pub use ir::{Component, Field, Repetition};
pub use separators::{DelimiterKind, Separators, NULL_MARKER};
pub use value::{PrimitiveKind, Value};
