//! A handful of the composite datatypes real HL7 v2.x traffic leans on
//! constantly: `CX` (extended composite ID), `XPN` (extended person name),
//! and `CE` (coded element). These are schema *data*, not core machinery —
//! the hundreds of real declarations are out of scope and would be ported
//! mechanically; this module carries just enough to exercise the segment
//! specs below end to end.

use oxhl7_core::PrimitiveKind;
use oxhl7_schema::{CompositeMember, CompositeMemberKind, CompositeSpec};

/// `CX.4`: the assigning authority sub-composite (namespace + universal ID).
static CX_ASSIGNING_AUTHORITY: CompositeSpec = CompositeSpec::new(&[
    CompositeMember { name: "namespace_id", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "universal_id", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
]);

/// Extended composite ID with check digit (patient/provider identifiers).
pub static CX: CompositeSpec = CompositeSpec::new(&[
    CompositeMember { name: "id", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "check_digit", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "check_digit_scheme", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "assigning_authority", kind: CompositeMemberKind::Nested(&CX_ASSIGNING_AUTHORITY) },
]);

/// Extended person name: family name, given name, middle name, suffix.
pub static XPN: CompositeSpec = CompositeSpec::new(&[
    CompositeMember { name: "family_name", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "given_name", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "middle_name", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "suffix", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
]);

/// Coded element: identifier + text, in the locally-assigned coding system.
pub static CE: CompositeSpec = CompositeSpec::new(&[
    CompositeMember { name: "identifier", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "text", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "coding_system", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
]);

/// Extended address: street, city, state, zip.
pub static XAD: CompositeSpec = CompositeSpec::new(&[
    CompositeMember { name: "street", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "other_designation", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "city", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "state", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
    CompositeMember { name: "zip", kind: CompositeMemberKind::Primitive(PrimitiveKind::String) },
]);
