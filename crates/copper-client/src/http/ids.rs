/*
[INPUT]:  None (per-call request)
[OUTPUT]: External identifiers for created resources
[POS]:    HTTP layer - injectable id source for deposit targets
[UPDATE]: When changing identifier format
*/

use std::fmt;

use uuid::Uuid;

/// Source of fresh external identifiers
pub trait IdGenerator: fmt::Debug + Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Mock generator for testing, always returns the same id
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> String {
        self.id.clone()
    }
}
