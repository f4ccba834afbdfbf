use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle: `Requested → Assigned → Completed`, with `Cancelled`
/// reachable only from `Assigned`. Assignment happens at booking time, so
/// `Requested` is transient in practice. Any other string in a persisted
/// file fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideStatus {
    Requested,
    Assigned,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub driver_id: Uuid,
    pub pickup: String,
    pub dropoff: String,
    pub status: RideStatus,
    pub eta_minutes: f64,
    pub requested_at: DateTime<Utc>,
}
