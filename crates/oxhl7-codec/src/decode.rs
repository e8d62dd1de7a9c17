//! Byte slice → IR. The three `decode_*` functions mirror the delimiter
//! hierarchy one level at a time; `decode_value` sits underneath all of them,
//! turning a leaf's bytes into a typed [`Value`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use oxhl7_core::{Component, ErrorKind, Field, PrimitiveKind, ReadError, Repetition, Separators, Value, NULL_MARKER};

use crate::escape::unescape;

/// Split `bytes` on `sep`, dropping a trailing run of empty pieces when
/// `trim` is set. Never returns an empty vector — splitting always yields at
/// least one piece, even for empty input.
fn split_trimmed(bytes: &[u8], sep: u8, trim: bool) -> Vec<&[u8]> {
    let mut pieces: Vec<&[u8]> = bytes.split(|&b| b == sep).collect();
    if trim {
        while pieces.len() > 1 && pieces.last().is_some_and(|p| p.is_empty()) {
            pieces.pop();
        }
    }
    pieces
}

/// A byte is printable ASCII or Latin-1-supplement; HL7 content outside this
/// range has already been rejected by the lexer, so this is a 1:1 mapping
/// rather than a real decode.
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

pub fn decode_value(bytes: &[u8], kind: PrimitiveKind) -> Result<Value, ReadError> {
    if bytes.is_empty() {
        return Ok(Value::String(String::new()));
    }
    if bytes == NULL_MARKER {
        return Ok(Value::Null);
    }
    let bad_value = || ReadError::new(ErrorKind::BadValue {
        kind,
        raw: latin1_to_string(bytes),
    });
    match kind {
        PrimitiveKind::String => Ok(Value::String(latin1_to_string(bytes))),
        PrimitiveKind::Integer => {
            let text = std::str::from_utf8(bytes).map_err(|_| bad_value())?;
            text.parse::<i64>().map(Value::Integer).map_err(|_| bad_value())
        }
        PrimitiveKind::Float => {
            let text = std::str::from_utf8(bytes).map_err(|_| bad_value())?;
            text.parse::<f64>().map(Value::Float).map_err(|_| bad_value())
        }
        PrimitiveKind::Date => {
            let text = std::str::from_utf8(bytes).map_err(|_| bad_value())?;
            NaiveDate::parse_from_str(text, "%Y%m%d").map(Value::Date).map_err(|_| bad_value())
        }
        PrimitiveKind::DateTime => {
            let text = std::str::from_utf8(bytes).map_err(|_| bad_value())?;
            decode_datetime(text).ok_or_else(bad_value).map(Value::DateTime)
        }
    }
}

fn decode_datetime(text: &str) -> Option<NaiveDateTime> {
    if text.len() < 8 || !text.is_char_boundary(8) {
        return None;
    }
    let (date_part, rest) = text.split_at(8);
    let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
    if rest.is_empty() {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if rest.len() < 4 || !rest.is_char_boundary(4) {
        return None;
    }
    let (hm_part, sec_part) = rest.split_at(4);
    let time = if sec_part.is_empty() {
        NaiveTime::parse_from_str(hm_part, "%H%M").ok()?
    } else {
        NaiveTime::parse_from_str(&format!("{hm_part}{sec_part}"), "%H%M%S").ok()?
    };
    Some(date.and_time(time))
}

/// "Decode subcomponents": the leaf level of the hierarchy under a component.
pub fn decode_subcomponents(
    bytes: &[u8],
    seps: &Separators,
    trim: bool,
    kind: PrimitiveKind,
) -> Result<Component, ReadError> {
    let pieces = split_trimmed(bytes, seps.subcomponent, trim);
    if pieces.len() == 1 {
        let value = decode_leaf(pieces[0], seps, kind)?;
        Ok(Component::Single(value))
    } else {
        let values = pieces
            .into_iter()
            .map(|p| decode_leaf(p, seps, kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Component::Subcomponents(values))
    }
}

fn decode_leaf(bytes: &[u8], seps: &Separators, kind: PrimitiveKind) -> Result<Value, ReadError> {
    if bytes == NULL_MARKER {
        return Ok(Value::Null);
    }
    match kind {
        PrimitiveKind::String if !bytes.is_empty() => {
            let unescaped = unescape(bytes, seps);
            decode_value(&unescaped, kind)
        }
        _ => decode_value(bytes, kind),
    }
}

/// "Decode components" (single-repetition form). Preserves the component
/// wrap when a lone component decodes to a subcomponent tuple, so the
/// "this is a component" signal is never lost to arity collapse.
pub fn decode_components(
    bytes: &[u8],
    seps: &Separators,
    trim: bool,
    kind: PrimitiveKind,
) -> Result<Repetition, ReadError> {
    let pieces = split_trimmed(bytes, seps.component, trim);
    if pieces.len() == 1 {
        match decode_subcomponents(pieces[0], seps, trim, kind)? {
            single @ Component::Single(_) => Ok(Repetition::Single(single.value().cloned().unwrap_or(Value::Null))),
            tuple @ Component::Subcomponents(_) => Ok(Repetition::Components(vec![tuple])),
        }
    } else {
        let components = pieces
            .into_iter()
            .map(|p| decode_subcomponents(p, seps, trim, kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Repetition::Components(components))
    }
}

/// "Decode field": the top of the hierarchy, handling the repetition split
/// and the field-wide empty/null special cases.
pub fn decode_field(bytes: &[u8], seps: &Separators, trim: bool, kind: PrimitiveKind) -> Result<Field, ReadError> {
    if bytes.is_empty() {
        return Ok(Field::Single(Value::String(String::new())));
    }
    if bytes == NULL_MARKER {
        return Ok(Field::Single(Value::Null));
    }
    let pieces = split_trimmed(bytes, seps.repetition, trim);
    if pieces.len() == 1 {
        let repetition = decode_components(pieces[0], seps, trim, kind)?;
        Ok(Field::from_repetition(repetition))
    } else {
        let repetitions = pieces
            .into_iter()
            .map(|p| decode_components(p, seps, trim, kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Field::Repetitions(repetitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_elision_example() {
        // Trailing-empty runs are elided at every nesting level when trim=true.
        let seps = Separators::default();
        let field = decode_field(b"504599^223344&&IIN&^~", &seps, true, PrimitiveKind::String).unwrap();
        match field {
            Field::Components(components) => {
                assert_eq!(components.len(), 2);
                assert_eq!(components[0], Component::Single(Value::String("504599".into())));
                assert_eq!(
                    components[1],
                    Component::Subcomponents(vec![
                        Value::String("223344".into()),
                        Value::String(String::new()),
                        Value::String("IIN".into()),
                    ])
                );
            }
            other => panic!("expected Components, got {other:?}"),
        }
    }

    #[test]
    fn empty_repetitions_decode_to_empty_strings() {
        let seps = Separators::default();
        let field = decode_field(b"a~~b", &seps, false, PrimitiveKind::String).unwrap();
        match field {
            Field::Repetitions(reps) => {
                assert_eq!(reps.len(), 3);
                assert_eq!(reps[1], Repetition::Single(Value::String(String::new())));
            }
            other => panic!("expected Repetitions, got {other:?}"),
        }
    }

    #[test]
    fn null_marker_wins_regardless_of_kind() {
        let seps = Separators::default();
        let field = decode_field(b"\"\"", &seps, true, PrimitiveKind::Integer).unwrap();
        assert_eq!(field, Field::Single(Value::Null));
    }

    #[test]
    fn leap_year_date_rejected() {
        assert!(matches!(
            decode_value(b"20130229", PrimitiveKind::Date),
            Err(ReadError { kind: ErrorKind::BadValue { .. }, .. })
        ));
    }

    #[test]
    fn datetime_without_seconds() {
        let dt = decode_value(b"201302281230", PrimitiveKind::DateTime).unwrap();
        assert_eq!(dt, Value::DateTime(NaiveDate::from_ymd_opt(2013, 2, 28).unwrap().and_hms_opt(12, 30, 0).unwrap()));
    }

    #[test]
    fn integer_rejects_fractional() {
        assert!(decode_value(b"12.5", PrimitiveKind::Integer).is_err());
        assert!(decode_value(b"12.5", PrimitiveKind::Float).is_ok());
    }
}
