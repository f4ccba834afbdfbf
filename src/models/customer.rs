use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value object handed in by the caller; the dispatch core only appends
/// to `ride_history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub ride_history: Vec<Uuid>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ride_history: Vec::new(),
        }
    }
}
