//! Simulated payment. No money moves; the confirmation is a pure function
//! of ride state, so repeat calls are harmless.

use crate::models::ride::Ride;

pub fn process_payment(ride: Option<&Ride>) -> String {
    match ride {
        Some(ride) => format!("Payment processed for ride {}", ride.id),
        None => "Payment failed: ride not found".to_string(),
    }
}
