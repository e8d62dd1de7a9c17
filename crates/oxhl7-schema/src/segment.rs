//! A segment spec: an addressable map from sequence number to the ordered
//! field specs that live at that sequence.

use std::collections::HashMap;

use oxhl7_core::PrimitiveKind;

use crate::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub coordinate: Coordinate,
    pub kind: PrimitiveKind,
    /// Advisory only — never gates encoding.
    pub max_len: Option<usize>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, coordinate: Coordinate, kind: PrimitiveKind, max_len: Option<usize>) -> Self {
        Self { name, coordinate, kind, max_len }
    }
}

/// Map from 1-based sequence number to the field specs at that sequence.
/// Each per-sequence list is kept in descending coordinate order (the
/// insertion-friendly layout); callers walk it ascending via
/// [`SegmentSpec::fields_ascending`].
#[derive(Debug, Clone, Default)]
pub struct SegmentSpec {
    sequences: HashMap<usize, Vec<FieldSpec>>,
}

impl SegmentSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field spec. Panics if `(sequence, coordinate)` already has
    /// an entry — coordinate uniqueness is a construction-time invariant,
    /// not a runtime one.
    pub fn field(mut self, sequence: usize, spec: FieldSpec) -> Self {
        let list = self.sequences.entry(sequence).or_default();
        assert!(
            !list.iter().any(|existing| existing.coordinate == spec.coordinate),
            "duplicate coordinate {:?} at sequence {sequence}",
            spec.coordinate
        );
        let position = list.iter().position(|existing| existing.coordinate.sort_key() < spec.coordinate.sort_key()).unwrap_or(list.len());
        list.insert(position, spec);
        self
    }

    pub fn fields_ascending(&self, sequence: usize) -> impl Iterator<Item = &FieldSpec> {
        self.sequences.get(&sequence).into_iter().flat_map(|list| list.iter().rev())
    }

    pub fn sequences(&self) -> impl Iterator<Item = usize> + '_ {
        self.sequences.keys().copied()
    }

    pub fn lookup(&self, sequence: usize, name: &str) -> Option<&FieldSpec> {
        self.sequences.get(&sequence)?.iter().find(|spec| spec.name == name)
    }
}
