//! MLLP (Minimal Lower Layer Protocol) framing: the `0x0B`-prefixed,
//! `0x1C 0x0D`-suffixed envelope used to delimit messages on byte streams.
//!
//! This crate frames and unframes bytes only. Sockets, TLS, connection
//! pools, and anything else above the wire envelope are out of scope —
//! see DESIGN.md for what that left on the floor.

use oxhl7_core::{ErrorKind, ReadError};

pub const START_OF_BLOCK: u8 = 0x0B;
pub const END_OF_BLOCK: u8 = 0x1C;
pub const CARRIAGE_RETURN: u8 = 0x0D;

/// Result of attempting to strip an MLLP envelope off a byte buffer.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// The envelope was complete; `&'a [u8]` is the interior message bytes.
    Frame(&'a [u8]),
    /// The buffer starts with `START_OF_BLOCK` but doesn't yet end with the
    /// closing trailer — more bytes are needed before a frame can be taken.
    Incomplete,
    Err(ReadError),
}

/// Wrap `bytes` in an MLLP envelope: `START_OF_BLOCK .. END_OF_BLOCK
/// CARRIAGE_RETURN`.
pub fn to_mllp(bytes: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(bytes.len() + 3);
    framed.push(START_OF_BLOCK);
    framed.extend_from_slice(bytes);
    framed.push(END_OF_BLOCK);
    framed.push(CARRIAGE_RETURN);
    framed
}

/// Strip an MLLP envelope off `bytes`. See [`Outcome`] for the three
/// possible results.
pub fn from_mllp(bytes: &[u8]) -> Outcome<'_> {
    let Some(&first) = bytes.first() else {
        return Outcome::Err(ReadError::new(ErrorKind::BadMllpFraming));
    };
    if first != START_OF_BLOCK {
        return Outcome::Err(ReadError::new(ErrorKind::BadMllpFraming));
    }
    if bytes.len() >= 3 && bytes[bytes.len() - 2] == END_OF_BLOCK && bytes[bytes.len() - 1] == CARRIAGE_RETURN {
        Outcome::Frame(&bytes[1..bytes.len() - 2])
    } else {
        tracing::debug!(len = bytes.len(), "MLLP frame missing trailer, awaiting more bytes");
        Outcome::Incomplete
    }
}
