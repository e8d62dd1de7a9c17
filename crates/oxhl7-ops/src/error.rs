//! Error type for this crate's boundary. Read/write failures are entirely
//! [`oxhl7_core::ReadError`] under the hood; this wrapper exists so callers
//! of `oxhl7-ops` depend on one error type per crate, the way every other
//! crate in this workspace does, rather than reaching into `oxhl7-core`
//! directly.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] oxhl7_core::ReadError),
}
