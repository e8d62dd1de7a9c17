//! A segment instance: a named, typed view over one segment, built from (and
//! convertible back to) the untyped [`RawSegment`] the parser crate deals in.

use std::collections::HashMap;

use oxhl7_codec::{decode_value, encode_value};
use oxhl7_core::{Field, PrimitiveKind, ReadError, Value};
use oxhl7_parser::RawSegment;

use crate::bridge;
use crate::segment::SegmentSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn retype(value: Value, kind: PrimitiveKind) -> Result<Value, ReadError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::String(s) => decode_value(s.as_bytes(), kind),
        typed => Ok(typed),
    }
}

fn stringify(value: &Value, kind: PrimitiveKind) -> Result<Value, ReadError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::String(s) => Ok(Value::String(s.clone())),
        typed => {
            let bytes = encode_value(typed, kind)?;
            Ok(Value::String(bytes.into_iter().map(|b| b as char).collect()))
        }
    }
}

fn empty_field() -> Field {
    Field::Single(Value::String(String::new()))
}

/// A segment's typed attributes, keyed by schema field name. A repeating
/// field carries one value per occurrence; a non-repeating one always holds
/// exactly one.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentInstance {
    pub id: String,
    fields: HashMap<&'static str, Vec<Value>>,
}

impl SegmentInstance {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), fields: HashMap::new() }
    }

    pub fn set(&mut self, name: &'static str, values: Vec<Value>) {
        self.fields.insert(name, values);
    }

    /// The first (or only) occurrence's value.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).and_then(|vs| vs.first())
    }

    /// Every occurrence's value, in repetition order.
    pub fn values(&self, name: &str) -> &[Value] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Builds a typed instance from a raw segment by running every declared
    /// field through the [`bridge::parse`]/retype pipeline. Fields absent
    /// from the raw segment (beyond its field count) are simply not set.
    pub fn from_raw(raw: &RawSegment, spec: &SegmentSpec) -> Result<Self, ReadError> {
        let mut instance = Self::new(raw.id.clone());
        for sequence in spec.sequences() {
            let Some(field_ir) = raw.field(sequence) else { continue };
            let specs: Vec<_> = spec.fields_ascending(sequence).collect();
            if specs.is_empty() {
                continue;
            }
            let maps = bridge::parse(field_ir, &specs);
            for field_spec in &specs {
                let mut values = Vec::with_capacity(maps.len());
                for map in &maps {
                    let raw_value = map.get(&field_spec.coordinate).cloned().unwrap_or(Value::String(String::new()));
                    values.push(retype(raw_value, field_spec.kind)?);
                }
                instance.set(field_spec.name, values);
            }
        }
        Ok(instance)
    }

    /// Rebuilds a raw segment covering every sequence the spec declares,
    /// padding untouched sequences with an empty field so later, present
    /// sequences keep their positional index.
    pub fn to_raw(&self, spec: &SegmentSpec) -> Result<RawSegment, ReadError> {
        let max_sequence = spec.sequences().max().unwrap_or(0);
        let mut fields = Vec::with_capacity(max_sequence);
        for sequence in 1..=max_sequence {
            let specs: Vec<_> = spec.fields_ascending(sequence).collect();
            if specs.is_empty() {
                fields.push(empty_field());
                continue;
            }
            let repetition_count = specs.iter().filter_map(|fs| self.fields.get(fs.name).map(Vec::len)).max().unwrap_or(0);
            if repetition_count == 0 {
                fields.push(empty_field());
                continue;
            }
            let mut maps = Vec::with_capacity(repetition_count);
            for rep in 0..repetition_count {
                let mut map = HashMap::new();
                for field_spec in &specs {
                    let value = self.fields.get(field_spec.name).and_then(|vs| vs.get(rep)).cloned().unwrap_or(Value::String(String::new()));
                    map.insert(field_spec.coordinate, stringify(&value, field_spec.kind)?);
                }
                maps.push(map);
            }
            fields.push(bridge::build(&maps, &specs).unwrap_or_else(empty_field));
        }
        Ok(RawSegment { id: self.id.clone(), fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::segment::FieldSpec;
    use oxhl7_core::Separators;

    fn pid_spec() -> SegmentSpec {
        SegmentSpec::new()
            .field(3, FieldSpec::new("patient_id", Coordinate::Component(1), PrimitiveKind::String, None))
            .field(7, FieldSpec::new("birth_date", Coordinate::Field, PrimitiveKind::Date, None))
    }

    #[test]
    fn round_trips_a_typed_field_through_raw() {
        let spec = pid_spec();
        let seps = Separators::default();
        let field3 = oxhl7_codec::decode_field(b"504599", &seps, true, PrimitiveKind::String).unwrap();
        let field7 = oxhl7_codec::decode_field(b"19801231", &seps, true, PrimitiveKind::String).unwrap();
        let raw = RawSegment {
            id: "PID".into(),
            fields: vec![empty_field(), empty_field(), field3, empty_field(), empty_field(), empty_field(), field7],
        };

        let instance = SegmentInstance::from_raw(&raw, &spec).unwrap();
        assert_eq!(instance.value("patient_id"), Some(&Value::String("504599".into())));
        assert_eq!(
            instance.value("birth_date"),
            Some(&Value::Date(chrono::NaiveDate::from_ymd_opt(1980, 12, 31).unwrap()))
        );

        let rebuilt = instance.to_raw(&spec).unwrap();
        assert_eq!(rebuilt.field(3), raw.field(3));
        assert_eq!(rebuilt.field(7), raw.field(7));
    }

    #[test]
    fn absent_field_is_simply_not_set() {
        let spec = pid_spec();
        let raw = RawSegment { id: "PID".into(), fields: vec![empty_field(), empty_field()] };
        let instance = SegmentInstance::from_raw(&raw, &spec).unwrap();
        assert_eq!(instance.value("patient_id"), None);
        assert_eq!(instance.value("birth_date"), None);
    }
}
