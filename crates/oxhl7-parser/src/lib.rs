//! The incremental lexer, and the `Reader`/`Writer` pair built on top of it
//! that turn wire bytes into (and back out of) an untyped segment/field
//! structure. Schema-driven typing lives one layer up, in `oxhl7-schema`.

pub mod dialect;
pub mod lexer;
pub mod reader;
pub mod writer;

pub use dialect::Dialect;
pub use lexer::{LexOutcome, Lexer, SeparatorKind, Token};
pub use reader::{read, Outcome, RawMessage, RawSegment, ReadOptions, Reader};
pub use writer::{write, WriteOptions, Writer};
