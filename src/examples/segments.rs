//! A representative handful of segment specs — enough to read and write a
//! realistic ADT/ORU-shaped message end to end. The hundreds of segments a
//! production deployment needs are schema data, out of scope here; a real
//! deployment would generate this module from an external schema
//! description rather than hand-declaring it.

use oxhl7_core::PrimitiveKind;
use oxhl7_schema::{Coordinate, FieldSpec, SegmentSpec};

use super::composites::{CE, CX, XAD, XPN};

fn leaf(name: &'static str, coordinate: Coordinate, kind: PrimitiveKind, max_len: Option<usize>) -> FieldSpec {
    FieldSpec::new(name, coordinate, kind, max_len)
}

/// A field spec built from a composite member lookup, panicking if the name
/// isn't declared on that composite — a schema-construction bug, not a
/// runtime condition.
fn from_composite(name: &'static str, composite: &oxhl7_schema::CompositeSpec, key: &str, max_len: Option<usize>) -> FieldSpec {
    let (coordinate, kind) = composite
        .coordinate_of(key)
        .unwrap_or_else(|| panic!("composite has no primitive member {key:?}"));
    FieldSpec::new(name, coordinate, kind, max_len)
}

fn from_composite_nested(name: &'static str, composite: &oxhl7_schema::CompositeSpec, key: &str, subkey: &str, max_len: Option<usize>) -> FieldSpec {
    let (coordinate, kind) = composite
        .coordinate_of_nested(key, subkey)
        .unwrap_or_else(|| panic!("composite has no nested member {key:?}.{subkey:?}"));
    FieldSpec::new(name, coordinate, kind, max_len)
}

/// `MSH` — message header. `MSH.1`/`MSH.2` are the separators themselves and
/// never addressed through the schema; the first declarable sequence is 3.
pub fn msh() -> SegmentSpec {
    SegmentSpec::new()
        .field(3, leaf("sending_application", Coordinate::Field, PrimitiveKind::String, Some(180)))
        .field(4, leaf("sending_facility", Coordinate::Field, PrimitiveKind::String, Some(180)))
        .field(5, leaf("receiving_application", Coordinate::Field, PrimitiveKind::String, Some(180)))
        .field(6, leaf("receiving_facility", Coordinate::Field, PrimitiveKind::String, Some(180)))
        .field(7, leaf("date_time_of_message", Coordinate::Field, PrimitiveKind::DateTime, Some(26)))
        .field(9, leaf("message_code", Coordinate::Component(1), PrimitiveKind::String, Some(3)))
        .field(9, leaf("trigger_event", Coordinate::Component(2), PrimitiveKind::String, Some(3)))
        .field(9, leaf("message_structure", Coordinate::Component(3), PrimitiveKind::String, Some(7)))
        .field(10, leaf("message_control_id", Coordinate::Field, PrimitiveKind::String, Some(20)))
        .field(11, leaf("processing_id", Coordinate::Component(1), PrimitiveKind::String, Some(3)))
        .field(12, leaf("version_id", Coordinate::Field, PrimitiveKind::String, Some(60)))
}

/// `PID` — patient identification.
pub fn pid() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, leaf("set_id", Coordinate::Field, PrimitiveKind::Integer, Some(4)))
        .field(3, from_composite("patient_id", &CX, "id", Some(20)))
        .field(3, from_composite_nested("patient_id_authority", &CX, "assigning_authority", "namespace_id", Some(20)))
        .field(5, from_composite("family_name", &XPN, "family_name", Some(50)))
        .field(5, from_composite("given_name", &XPN, "given_name", Some(50)))
        .field(7, leaf("date_of_birth", Coordinate::Field, PrimitiveKind::Date, Some(8)))
        .field(8, leaf("sex", Coordinate::Field, PrimitiveKind::String, Some(1)))
        .field(11, from_composite("address_street", &XAD, "street", Some(120)))
        .field(11, from_composite("address_city", &XAD, "city", Some(50)))
        .field(11, from_composite("address_state", &XAD, "state", Some(2)))
        .field(11, from_composite("address_zip", &XAD, "zip", Some(12)))
}

/// `PV1` — patient visit.
pub fn pv1() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, leaf("set_id", Coordinate::Field, PrimitiveKind::Integer, Some(4)))
        .field(2, leaf("patient_class", Coordinate::Field, PrimitiveKind::String, Some(1)))
        .field(3, leaf("point_of_care", Coordinate::Component(1), PrimitiveKind::String, Some(20)))
        .field(3, leaf("room", Coordinate::Component(2), PrimitiveKind::String, Some(20)))
        .field(3, leaf("bed", Coordinate::Component(3), PrimitiveKind::String, Some(20)))
        .field(7, from_composite("attending_doctor_id", &CX, "id", Some(20)))
        .field(19, leaf("visit_number", Coordinate::Field, PrimitiveKind::String, Some(20)))
        .field(44, leaf("admit_date_time", Coordinate::Field, PrimitiveKind::DateTime, Some(26)))
}

/// `ORC` — common order.
pub fn orc() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, leaf("order_control", Coordinate::Field, PrimitiveKind::String, Some(2)))
        .field(2, leaf("placer_order_number", Coordinate::Component(1), PrimitiveKind::String, Some(22)))
        .field(3, leaf("filler_order_number", Coordinate::Component(1), PrimitiveKind::String, Some(22)))
        .field(9, leaf("date_time_of_transaction", Coordinate::Field, PrimitiveKind::DateTime, Some(26)))
        .field(12, from_composite("ordering_provider_id", &CX, "id", Some(20)))
}

/// `OBR` — observation request.
pub fn obr() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, leaf("set_id", Coordinate::Field, PrimitiveKind::Integer, Some(4)))
        .field(2, leaf("placer_order_number", Coordinate::Component(1), PrimitiveKind::String, Some(22)))
        .field(3, leaf("filler_order_number", Coordinate::Component(1), PrimitiveKind::String, Some(22)))
        .field(4, from_composite("universal_service_id", &CE, "identifier", Some(20)))
        .field(4, from_composite("universal_service_text", &CE, "text", Some(200)))
        .field(7, leaf("observation_date_time", Coordinate::Field, PrimitiveKind::DateTime, Some(26)))
}

/// `OBX` — observation/result.
pub fn obx() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, leaf("set_id", Coordinate::Field, PrimitiveKind::Integer, Some(4)))
        .field(2, leaf("value_type", Coordinate::Field, PrimitiveKind::String, Some(2)))
        .field(3, from_composite("observation_identifier", &CE, "identifier", Some(20)))
        .field(3, from_composite("observation_text", &CE, "text", Some(200)))
        .field(5, leaf("observation_value", Coordinate::Field, PrimitiveKind::String, Some(65535)))
        .field(6, leaf("units", Coordinate::Component(1), PrimitiveKind::String, Some(20)))
        .field(11, leaf("observation_result_status", Coordinate::Field, PrimitiveKind::String, Some(1)))
}

/// `NTE` — notes and comments.
pub fn nte() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, leaf("set_id", Coordinate::Field, PrimitiveKind::Integer, Some(4)))
        .field(3, leaf("comment", Coordinate::Field, PrimitiveKind::String, Some(65535)))
}

/// `PR1` — procedures.
pub fn pr1() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, leaf("set_id", Coordinate::Field, PrimitiveKind::Integer, Some(4)))
        .field(3, from_composite("procedure_code", &CE, "identifier", Some(20)))
        .field(3, from_composite("procedure_text", &CE, "text", Some(200)))
        .field(5, leaf("procedure_date_time", Coordinate::Field, PrimitiveKind::DateTime, Some(26)))
}

/// `AUT` — authorization information.
pub fn aut() -> SegmentSpec {
    SegmentSpec::new()
        .field(1, from_composite("authorization_plan_id", &CE, "identifier", Some(20)))
        .field(3, leaf("authorization_number", Coordinate::Field, PrimitiveKind::String, Some(20)))
}

/// Batch/file wrapper segments (`BHS`/`BTS`/`FHS`/`FTS`): recognized so a
/// caller processing a batch file isn't surprised by an `UnknownSegmentId`,
/// but declared with no fields — their content isn't surfaced through the
/// typed view. A production deployment would give them the same
/// field-level treatment as any other segment.
pub fn batch_wrapper() -> SegmentSpec {
    SegmentSpec::new()
}
