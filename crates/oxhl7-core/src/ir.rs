//! The intermediate representation (IR) of one field: a recursive shape with
//! exactly three nesting levels, isomorphic to the delimiter hierarchy
//! (field / repetition / component / subcomponent).
//!
//! A naive representation collapses every level into an untyped,
//! arity-overloaded tuple: a component with one subcomponent looks the same
//! as a plain scalar unless you inspect its length, and callers disambiguate
//! by checking arity. Here each level is its own sum type, so "this is a
//! component, not a bare value" is a type-level fact rather than something
//! inferred from a `Vec`'s length — see the design note on dynamic tagged
//! tuples in DESIGN.md.

use crate::value::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A component is either a single value or a tuple of subcomponents.
///
/// Subcomponents are themselves leaves (`Value`, string by default) — HL7
/// nests at most two levels below a field, so there is no recursive
/// `Subcomponent` type distinct from `Value`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    Single(Value),
    Subcomponents(Vec<Value>),
}

impl Component {
    pub fn from_value(v: Value) -> Self {
        Component::Single(v)
    }

    /// The first subcomponent/value, the common case for simple reads.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Component::Single(v) => Some(v),
            Component::Subcomponents(vs) => vs.first(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Component::Single(v) => v.is_empty_string(),
            Component::Subcomponents(vs) => vs.iter().all(|v| v.is_empty_string()),
        }
    }
}

/// One occurrence of a field: either a bare value or a tuple of components.
/// This is "a field without the repetition level", split out from `Field`
/// itself so `Field::Repetitions` can hold a `Vec` of it without infinite
/// recursion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Repetition {
    Single(Value),
    Components(Vec<Component>),
}

impl Repetition {
    pub fn from_value(v: Value) -> Self {
        Repetition::Single(v)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Repetition::Single(v) => Some(v),
            Repetition::Components(cs) => cs.first().and_then(Component::value),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Repetition::Single(v) => v.is_empty_string(),
            Repetition::Components(cs) => cs.iter().all(Component::is_empty),
        }
    }
}

/// A field: a single value, a component tuple, or (when more than one
/// repetition is present) a list of repetitions.
///
/// Invariant: a field with exactly one repetition present is represented as
/// that repetition directly — `Single` or `Components` — never as
/// `Repetitions` holding one element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    Single(Value),
    Components(Vec<Component>),
    Repetitions(Vec<Repetition>),
}

impl Field {
    pub fn from_value(v: Value) -> Self {
        Field::Single(v)
    }

    pub fn from_repetition(r: Repetition) -> Self {
        match r {
            Repetition::Single(v) => Field::Single(v),
            Repetition::Components(cs) => Field::Components(cs),
        }
    }

    /// The number of repetitions present (1 if not a `Repetitions` field).
    pub fn repetition_count(&self) -> usize {
        match self {
            Field::Repetitions(reps) => reps.len(),
            _ => 1,
        }
    }

    /// Borrow the `n`th repetition (0-based), synthesizing a view of `self`
    /// for non-repeating fields at index 0.
    pub fn repetition(&self, n: usize) -> Option<Repetition> {
        match self {
            Field::Repetitions(reps) => reps.get(n).cloned(),
            Field::Single(v) if n == 0 => Some(Repetition::Single(v.clone())),
            Field::Components(cs) if n == 0 => Some(Repetition::Components(cs.clone())),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Field::Single(v) => Some(v),
            Field::Components(cs) => cs.first().and_then(Component::value),
            Field::Repetitions(reps) => reps.first().and_then(Repetition::value),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Field::Single(v) => v.is_empty_string(),
            Field::Components(cs) => cs.iter().all(Component::is_empty),
            Field::Repetitions(reps) => reps.iter().all(Repetition::is_empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_wrap_preserves_the_component_level() {
        // "223344&&IIN" -> one component containing three subcomponents.
        let comp = Component::Subcomponents(vec![
            Value::String("223344".into()),
            Value::String(String::new()),
            Value::String("IIN".into()),
        ]);
        assert_eq!(comp.value(), Some(&Value::String("223344".into())));
        assert!(matches!(comp, Component::Subcomponents(_)));
    }

    #[test]
    fn single_repetition_field_is_not_wrapped() {
        let f = Field::from_value(Value::String("x".into()));
        assert_eq!(f.repetition_count(), 1);
        assert!(!matches!(f, Field::Repetitions(_)));
    }
}
