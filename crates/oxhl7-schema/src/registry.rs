//! Maps segment IDs to their declared [`SegmentSpec`], the thing a reader
//! needs to turn a stream of raw segments into typed instances.

use std::collections::HashMap;

use crate::segment::SegmentSpec;

#[derive(Debug, Clone, Default)]
pub struct SegmentRegistry {
    specs: HashMap<&'static str, SegmentSpec>,
}

impl SegmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, id: &'static str, spec: SegmentSpec) -> Self {
        self.specs.insert(id, spec);
        self
    }

    pub fn get(&self, id: &str) -> Option<&SegmentSpec> {
        self.specs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.specs.contains_key(id)
    }
}
