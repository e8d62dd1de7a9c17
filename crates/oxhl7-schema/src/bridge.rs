//! The bridge between a segment's coordinate/value map and the raw [`Field`]
//! IR the parser crate works with.
//!
//! `build` goes from typed values (one map per repetition, keyed by
//! [`Coordinate`]) to a `Field`, gap-filling any component/subcomponent
//! index a spec skips over. `parse` goes the other way, walking a `Field`'s
//! existing shape and reading out a value per declared coordinate — falling
//! back to an empty string wherever the IR turns out shallower than the spec
//! expects.

use std::collections::HashMap;

use oxhl7_core::{Component, Field, Repetition, Value};

use crate::coordinate::Coordinate;
use crate::segment::FieldSpec;

fn empty() -> Value {
    Value::String(String::new())
}

fn build_component(map: &HashMap<Coordinate, Value>, index: usize, specs: &[&FieldSpec]) -> Component {
    let sub_indices: Vec<usize> = specs
        .iter()
        .filter_map(|spec| match spec.coordinate {
            Coordinate::Subcomponent(i, j) if i == index => Some(j),
            _ => None,
        })
        .collect();

    match sub_indices.iter().max() {
        None => {
            let value = map.get(&Coordinate::Component(index)).cloned().unwrap_or_else(empty);
            Component::Single(value)
        }
        Some(&max_sub) => {
            let values = (1..=max_sub)
                .map(|j| map.get(&Coordinate::Subcomponent(index, j)).cloned().unwrap_or_else(empty))
                .collect();
            Component::Subcomponents(values)
        }
    }
}

fn build_repetition(map: &HashMap<Coordinate, Value>, specs: &[&FieldSpec]) -> Repetition {
    let component_indices: Vec<usize> = specs.iter().filter_map(|spec| spec.coordinate.component_index()).collect();

    match component_indices.iter().max() {
        None => {
            let value = map.get(&Coordinate::Field).cloned().unwrap_or_else(empty);
            Repetition::Single(value)
        }
        Some(&max_index) => {
            let components = (1..=max_index).map(|i| build_component(map, i, specs)).collect();
            Repetition::Components(components)
        }
    }
}

/// Assembles a `Field` from one coordinate/value map per repetition, in the
/// order repetitions occurred. Returns `None` when no repetition is present
/// at all — an absent field is skipped entirely, never defaulted to empty.
pub fn build(repetitions: &[HashMap<Coordinate, Value>], specs: &[&FieldSpec]) -> Option<Field> {
    if repetitions.is_empty() {
        return None;
    }
    let mut built: Vec<Repetition> = repetitions.iter().map(|map| build_repetition(map, specs)).collect();
    if built.len() == 1 {
        Some(Field::from_repetition(built.remove(0)))
    } else {
        Some(Field::Repetitions(built))
    }
}

fn extract_component(repetition: &Repetition, index: usize) -> Option<&Component> {
    match repetition {
        Repetition::Components(cs) => cs.get(index.checked_sub(1)?),
        Repetition::Single(_) => None,
    }
}

fn extract(repetition: &Repetition, coordinate: Coordinate) -> Value {
    match coordinate {
        Coordinate::Field => repetition.value().cloned().unwrap_or_else(empty),
        Coordinate::Component(i) => match repetition {
            Repetition::Single(v) if i == 1 => v.clone(),
            Repetition::Single(_) => empty(),
            Repetition::Components(_) => extract_component(repetition, i).and_then(Component::value).cloned().unwrap_or_else(empty),
        },
        Coordinate::Subcomponent(i, j) => match repetition {
            Repetition::Single(v) if i == 1 && j == 1 => v.clone(),
            Repetition::Single(_) => empty(),
            Repetition::Components(_) => match extract_component(repetition, i) {
                Some(Component::Single(v)) if j == 1 => v.clone(),
                Some(Component::Single(_)) => empty(),
                Some(Component::Subcomponents(vs)) => vs.get(j.wrapping_sub(1)).cloned().unwrap_or_else(empty),
                None => empty(),
            },
        },
    }
}

/// Reads one coordinate/value map per repetition out of a `Field`. Specs
/// absent from the field's own shape fall back to an empty string rather
/// than being omitted, since here the field is known to be present — only
/// its *depth* may fall short of what the spec asks for.
pub fn parse(field: &Field, specs: &[&FieldSpec]) -> Vec<HashMap<Coordinate, Value>> {
    (0..field.repetition_count())
        .filter_map(|n| field.repetition(n))
        .map(|repetition| specs.iter().map(|spec| (spec.coordinate, extract(&repetition, spec.coordinate))).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxhl7_core::PrimitiveKind;

    fn spec(name: &'static str, coordinate: Coordinate) -> FieldSpec {
        FieldSpec::new(name, coordinate, PrimitiveKind::String, None)
    }

    #[test]
    fn build_fills_gaps_between_declared_components() {
        let id = spec("id", Coordinate::Component(1));
        let authority = spec("authority", Coordinate::Subcomponent(3, 2));
        let specs = vec![&id, &authority];

        let mut map = HashMap::new();
        map.insert(Coordinate::Component(1), Value::String("504599".into()));
        map.insert(Coordinate::Subcomponent(3, 2), Value::String("IIN".into()));

        let field = build(&[map], &specs).unwrap();
        match field {
            Field::Components(cs) => {
                assert_eq!(cs.len(), 3);
                assert_eq!(cs[0], Component::Single(Value::String("504599".into())));
                assert_eq!(cs[1], Component::Single(Value::String(String::new())));
                assert!(matches!(&cs[2], Component::Subcomponents(vs) if vs.len() == 2 && vs[1] == Value::String("IIN".into())));
            }
            other => panic!("expected components, got {other:?}"),
        }
    }

    #[test]
    fn build_returns_none_for_absent_field() {
        let id = spec("id", Coordinate::Field);
        assert!(build(&[], &[&id]).is_none());
    }

    #[test]
    fn parse_falls_back_to_empty_when_ir_is_shallower_than_spec() {
        let id = spec("id", Coordinate::Component(1));
        let sub = spec("sub", Coordinate::Subcomponent(1, 2));
        let field = Field::Single(Value::String("only-value".into()));
        let maps = parse(&field, &[&id, &sub]);
        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0][&Coordinate::Component(1)], Value::String("only-value".into()));
        assert_eq!(maps[0][&Coordinate::Subcomponent(1, 2)], Value::String(String::new()));
    }

    #[test]
    fn parse_round_trips_through_build() {
        let id = spec("id", Coordinate::Component(1));
        let check = spec("check", Coordinate::Subcomponent(2, 1));
        let note = spec("note", Coordinate::Subcomponent(2, 3));
        let specs = vec![&id, &check, &note];

        let mut map = HashMap::new();
        map.insert(Coordinate::Component(1), Value::String("504599".into()));
        map.insert(Coordinate::Subcomponent(2, 1), Value::String("223344".into()));
        map.insert(Coordinate::Subcomponent(2, 3), Value::String("IIN".into()));

        let field = build(&[map.clone()], &specs).unwrap();
        let parsed = parse(&field, &specs);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0][&Coordinate::Component(1)], map[&Coordinate::Component(1)]);
        assert_eq!(parsed[0][&Coordinate::Subcomponent(2, 1)], map[&Coordinate::Subcomponent(2, 1)]);
        assert_eq!(parsed[0][&Coordinate::Subcomponent(2, 3)], map[&Coordinate::Subcomponent(2, 3)]);
    }
}
