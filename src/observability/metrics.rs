use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub bookings_total: IntCounterVec,
    pub rides_completed_total: IntCounter,
    pub rides_cancelled_total: IntCounter,
    pub drivers_available: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let bookings_total = IntCounterVec::new(
            Opts::new("bookings_total", "Booking attempts by outcome"),
            &["outcome"],
        )
        .expect("valid bookings_total metric");

        let rides_completed_total =
            IntCounter::new("rides_completed_total", "Total completed rides")
                .expect("valid rides_completed_total metric");

        let rides_cancelled_total =
            IntCounter::new("rides_cancelled_total", "Total cancelled rides")
                .expect("valid rides_cancelled_total metric");

        let drivers_available =
            IntGauge::new("drivers_available", "Current number of available drivers")
                .expect("valid drivers_available metric");

        registry
            .register(Box::new(bookings_total.clone()))
            .expect("register bookings_total");
        registry
            .register(Box::new(rides_completed_total.clone()))
            .expect("register rides_completed_total");
        registry
            .register(Box::new(rides_cancelled_total.clone()))
            .expect("register rides_cancelled_total");
        registry
            .register(Box::new(drivers_available.clone()))
            .expect("register drivers_available");

        Self {
            registry,
            bookings_total,
            rides_completed_total,
            rides_cancelled_total,
            drivers_available,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
