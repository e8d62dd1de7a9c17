//! Reusable composite shapes (HL7's `CX`, `XPN`, `CE`-style datatypes): a
//! named, ordered list of members, each either a primitive leaf or another
//! composite nested one level deeper. HL7 composites never nest past two
//! levels, so `Nested` is the deepest this type allows.

use oxhl7_core::PrimitiveKind;

use crate::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMemberKind {
    Primitive(PrimitiveKind),
    Nested(&'static CompositeSpec),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeMember {
    pub name: &'static str,
    pub kind: CompositeMemberKind,
}

/// An ordered composite datatype: members are addressed by 1-based position,
/// matching the component numbering the wire format itself uses.
#[derive(Debug, Clone, Copy)]
pub struct CompositeSpec {
    members: &'static [CompositeMember],
}

impl CompositeSpec {
    pub const fn new(members: &'static [CompositeMember]) -> Self {
        Self { members }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// 1-based position lookup.
    pub fn member_at(&self, position: usize) -> Option<&CompositeMember> {
        position.checked_sub(1).and_then(|i| self.members.get(i))
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name == name).map(|i| i + 1)
    }

    /// Translate a member name directly into the component-level coordinate
    /// it occupies. `None` both when the name is unknown and when it names a
    /// nested composite rather than a primitive leaf — callers wanting the
    /// nested case reach for [`Self::coordinate_of_nested`] instead.
    pub fn coordinate_of(&self, key: &str) -> Option<(Coordinate, PrimitiveKind)> {
        let position = self.position_of(key)?;
        match self.member_at(position)?.kind {
            CompositeMemberKind::Primitive(kind) => Some((Coordinate::Component(position), kind)),
            CompositeMemberKind::Nested(_) => None,
        }
    }

    /// Translate a `(component, sub-component)` name pair into a
    /// subcomponent-level coordinate. Composites nest at most two
    /// levels deep, so `subkey` must name a primitive leaf of the nested
    /// composite at `key` — a further `Nested` there would exceed that
    /// depth and is rejected the same way an unknown name is.
    pub fn coordinate_of_nested(&self, key: &str, subkey: &str) -> Option<(Coordinate, PrimitiveKind)> {
        let position = self.position_of(key)?;
        let CompositeMemberKind::Nested(inner) = self.member_at(position)?.kind else {
            return None;
        };
        let sub_position = inner.position_of(subkey)?;
        match inner.member_at(sub_position)?.kind {
            CompositeMemberKind::Primitive(kind) => Some((Coordinate::Subcomponent(position, sub_position), kind)),
            CompositeMemberKind::Nested(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CX_ASSIGNING_AUTHORITY: CompositeSpec = CompositeSpec::new(&[
        CompositeMember { name: "namespace_id", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
        CompositeMember { name: "universal_id", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    ]);

    static CX: CompositeSpec = CompositeSpec::new(&[
        CompositeMember { name: "id", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
        CompositeMember { name: "assigning_authority", kind: CompositeMemberKind::Nested(&CX_ASSIGNING_AUTHORITY) },
    ]);

    #[test]
    fn position_of_finds_declared_members() {
        assert_eq!(CX.position_of("assigning_authority"), Some(2));
        assert_eq!(CX.position_of("missing"), None);
    }

    #[test]
    fn nested_member_reaches_its_own_spec() {
        let member = CX.member_at(2).unwrap();
        match member.kind {
            CompositeMemberKind::Nested(inner) => assert_eq!(inner.member_count(), 2),
            CompositeMemberKind::Primitive(_) => panic!("expected nested composite"),
        }
    }

    #[test]
    fn coordinate_of_finds_a_primitive_leaf() {
        assert_eq!(CX.coordinate_of("id"), Some((Coordinate::Component(1), PrimitiveKind::String)));
        assert_eq!(CX.coordinate_of("assigning_authority"), None);
        assert_eq!(CX.coordinate_of("missing"), None);
    }

    #[test]
    fn coordinate_of_nested_descends_one_level() {
        assert_eq!(
            CX.coordinate_of_nested("assigning_authority", "universal_id"),
            Some((Coordinate::Subcomponent(2, 2), PrimitiveKind::String))
        );
        assert_eq!(CX.coordinate_of_nested("assigning_authority", "missing"), None);
        assert_eq!(CX.coordinate_of_nested("id", "anything"), None);
    }
}
