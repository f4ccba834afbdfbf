//! ETA estimation. Currently a placeholder so booking logic has a single
//! seam to swap in a real estimator later.

use crate::models::driver::Driver;

/// Flat estimate used until a real routing backend exists.
pub const DEFAULT_ETA_MINUTES: f64 = 15.0;

/// Location token reported when no driver record is on hand.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Contract: non-negative, deterministic for identical inputs, minutes.
pub fn calculate_eta(_driver_location: &str, _pickup_location: &str) -> f64 {
    DEFAULT_ETA_MINUTES
}

pub fn driver_location(driver: Option<&Driver>) -> String {
    match driver {
        Some(driver) => driver.location.clone(),
        None => UNKNOWN_LOCATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate_eta, driver_location, DEFAULT_ETA_MINUTES, UNKNOWN_LOCATION};
    use crate::models::driver::Driver;

    #[test]
    fn eta_is_deterministic_and_non_negative() {
        let first = calculate_eta("Downtown", "Airport");
        let second = calculate_eta("Downtown", "Airport");
        assert_eq!(first, second);
        assert!(first >= 0.0);
        assert_eq!(first, DEFAULT_ETA_MINUTES);
    }

    #[test]
    fn known_driver_reports_its_location() {
        let driver = Driver::new("Ada", "Harbor");
        assert_eq!(driver_location(Some(&driver)), "Harbor");
    }

    #[test]
    fn missing_driver_reports_sentinel() {
        assert_eq!(driver_location(None), UNKNOWN_LOCATION);
    }
}
