use tokio::sync::Mutex;

use crate::engine::dispatch::DispatchCore;
use crate::observability::metrics::Metrics;

/// Shared application state. The core sits behind a single mutex so every
/// book/complete/cancel is a serialized read-modify-write, held across the
/// synchronous flush to the store.
pub struct AppState {
    pub core: Mutex<DispatchCore>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(core: DispatchCore) -> Self {
        let metrics = Metrics::new();
        metrics
            .drivers_available
            .set(core.available_driver_count() as i64);

        Self {
            core: Mutex::new(core),
            metrics,
        }
    }
}
