//! Example segment/composite schema data: MSH, PID, PV1, ORC, OBR, OBX, NTE,
//! PR1, AUT, plus pass-through recognition for the BHS/BTS/FHS/FTS batch
//! wrapper segments. Sufficient to read and write a realistic ADT/ORU
//! message end to end without pretending to be a complete HL7 v2.x
//! conformance profile — the hundreds of real segment/composite
//! declarations a production deployment needs are out of scope here.

pub mod composites;
pub mod segments;

use std::sync::Arc;

use oxhl7_schema::SegmentRegistry;

/// The example registry this crate exercises its machinery against.
pub fn registry() -> Arc<SegmentRegistry> {
    Arc::new(
        SegmentRegistry::new()
            .register("MSH", segments::msh())
            .register("PID", segments::pid())
            .register("PV1", segments::pv1())
            .register("ORC", segments::orc())
            .register("OBR", segments::obr())
            .register("OBX", segments::obx())
            .register("NTE", segments::nte())
            .register("PR1", segments::pr1())
            .register("AUT", segments::aut())
            .register("BHS", segments::batch_wrapper())
            .register("BTS", segments::batch_wrapper())
            .register("FHS", segments::batch_wrapper())
            .register("FTS", segments::batch_wrapper())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_every_example_segment() {
        let reg = registry();
        for id in ["MSH", "PID", "PV1", "ORC", "OBR", "OBX", "NTE", "PR1", "AUT", "BHS", "BTS", "FHS", "FTS"] {
            assert!(reg.contains(id), "missing {id}");
        }
    }
}
