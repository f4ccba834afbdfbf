use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    /// Free-text location token, e.g. "Downtown". Not a coordinate.
    pub location: String,
    pub available: bool,
    /// Convenience back-reference; the ride record is the source of truth.
    pub current_ride: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: location.into(),
            available: true,
            current_ride: None,
            updated_at: Utc::now(),
        }
    }
}
