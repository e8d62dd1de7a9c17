//! IR → byte slice. Exact dual of [`crate::decode`]: joins replace splits,
//! trailing-empty elision happens before joining instead of after splitting.

use chrono::Timelike;
use oxhl7_core::{Component, ErrorKind, Field, PrimitiveKind, ReadError, Repetition, Separators, Value, NULL_MARKER};

use crate::escape::escape;

pub fn encode_value(value: &Value, kind: PrimitiveKind) -> Result<Vec<u8>, ReadError> {
    if matches!(value, Value::Null) {
        return Ok(NULL_MARKER.to_vec());
    }
    if matches!(value, Value::String(s) if s.is_empty()) {
        return Ok(Vec::new());
    }
    let bad_value = || ReadError::new(ErrorKind::BadValue { kind, raw: value.to_string() });
    match (value, kind) {
        (Value::String(s), PrimitiveKind::String) => Ok(s.chars().map(|c| c as u8).collect()),
        (Value::Integer(i), PrimitiveKind::Integer) => Ok(i.to_string().into_bytes()),
        (Value::Float(x), PrimitiveKind::Float) => Ok(x.to_string().into_bytes()),
        (Value::Date(d), PrimitiveKind::Date) => Ok(d.format("%Y%m%d").to_string().into_bytes()),
        (Value::DateTime(dt), PrimitiveKind::DateTime) => {
            let text = if dt.second() == 0 {
                dt.format("%Y%m%d%H%M").to_string()
            } else {
                dt.format("%Y%m%d%H%M%S").to_string()
            };
            Ok(text.into_bytes())
        }
        _ => Err(bad_value()),
    }
}

fn escape_leaf(value: &Value, seps: &Separators, kind: PrimitiveKind) -> Result<Vec<u8>, ReadError> {
    let raw = encode_value(value, kind)?;
    if kind == PrimitiveKind::String && !raw.is_empty() && !matches!(value, Value::Null) {
        Ok(escape(&raw, seps))
    } else {
        Ok(raw)
    }
}

fn join(mut chunks: Vec<Vec<u8>>, sep: u8, trim: bool) -> Vec<u8> {
    if trim {
        while chunks.len() > 1 && chunks.last().is_some_and(Vec::is_empty) {
            chunks.pop();
        }
    }
    chunks.join(&sep)
}

pub fn encode_subcomponents(component: &Component, seps: &Separators, trim: bool, kind: PrimitiveKind) -> Result<Vec<u8>, ReadError> {
    match component {
        Component::Single(v) => escape_leaf(v, seps, kind),
        Component::Subcomponents(vs) => {
            let chunks = vs.iter().map(|v| escape_leaf(v, seps, kind)).collect::<Result<Vec<_>, _>>()?;
            Ok(join(chunks, seps.subcomponent, trim))
        }
    }
}

pub fn encode_components(repetition: &Repetition, seps: &Separators, trim: bool, kind: PrimitiveKind) -> Result<Vec<u8>, ReadError> {
    match repetition {
        Repetition::Single(v) => escape_leaf(v, seps, kind),
        Repetition::Components(cs) => {
            let chunks = cs.iter().map(|c| encode_subcomponents(c, seps, trim, kind)).collect::<Result<Vec<_>, _>>()?;
            Ok(join(chunks, seps.component, trim))
        }
    }
}

pub fn encode_field(field: &Field, seps: &Separators, trim: bool, kind: PrimitiveKind) -> Result<Vec<u8>, ReadError> {
    match field {
        Field::Single(v) => escape_leaf(v, seps, kind),
        Field::Components(cs) => {
            let chunks = cs.iter().map(|c| encode_subcomponents(c, seps, trim, kind)).collect::<Result<Vec<_>, _>>()?;
            Ok(join(chunks, seps.component, trim))
        }
        Field::Repetitions(reps) => {
            let chunks = reps.iter().map(|r| encode_components(r, seps, trim, kind)).collect::<Result<Vec<_>, _>>()?;
            Ok(join(chunks, seps.repetition, trim))
        }
    }
}
