//! Decode and encode a single field's nested structure against the active
//! delimiter hierarchy, plus the escape/unescape pass that lets primitive
//! strings carry delimiter bytes.

pub mod decode;
pub mod encode;
pub mod escape;

pub use decode::{decode_components, decode_field, decode_subcomponents, decode_value};
pub use encode::{encode_components, encode_field, encode_subcomponents, encode_value};
pub use escape::{escape as escape_bytes, unescape as unescape_bytes};
