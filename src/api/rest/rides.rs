use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{eta, payment};
use crate::error::DispatchError;
use crate::models::customer::Customer;
use crate::models::ride::Ride;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rides", post(book_ride).get(ride_history))
        .route("/rides/:id", get(get_ride))
        .route("/rides/:id/complete", post(complete_ride))
        .route("/rides/:id/cancel", post(cancel_ride))
}

#[derive(Deserialize)]
pub struct BookRideRequest {
    pub customer_name: String,
    pub pickup: String,
    pub dropoff: String,
}

#[derive(Serialize)]
pub struct BookRideResponse {
    pub ride: Ride,
    pub customer: Customer,
    pub driver_location: String,
}

#[derive(Serialize)]
pub struct CompleteRideResponse {
    pub ride: Ride,
    pub payment: String,
}

async fn book_ride(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookRideRequest>,
) -> Result<Json<BookRideResponse>, DispatchError> {
    let mut customer = Customer::new(payload.customer_name);

    let mut core = state.core.lock().await;
    let result = core.book_ride(&mut customer, &payload.pickup, &payload.dropoff);

    let outcome = if result.is_ok() { "success" } else { "error" };
    state.metrics.bookings_total.with_label_values(&[outcome]).inc();
    state
        .metrics
        .drivers_available
        .set(core.available_driver_count() as i64);

    let ride = result?;
    let driver_location = eta::driver_location(core.driver(ride.driver_id));

    Ok(Json(BookRideResponse {
        ride,
        customer,
        driver_location,
    }))
}

async fn get_ride(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ride>, DispatchError> {
    let core = state.core.lock().await;
    let ride = core.ride(id).ok_or(DispatchError::RideNotFound(id))?;
    Ok(Json(ride.clone()))
}

async fn ride_history(State(state): State<Arc<AppState>>) -> Json<Vec<Ride>> {
    let core = state.core.lock().await;
    Json(core.all_rides())
}

async fn complete_ride(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompleteRideResponse>, DispatchError> {
    let mut core = state.core.lock().await;
    let ride = core.complete_ride(id)?;

    state.metrics.rides_completed_total.inc();
    state
        .metrics
        .drivers_available
        .set(core.available_driver_count() as i64);

    let payment = payment::process_payment(Some(&ride));
    Ok(Json(CompleteRideResponse { ride, payment }))
}

async fn cancel_ride(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ride>, DispatchError> {
    let mut core = state.core.lock().await;
    let ride = core.cancel_ride(id)?;

    state.metrics.rides_cancelled_total.inc();
    state
        .metrics
        .drivers_available
        .set(core.available_driver_count() as i64);

    Ok(Json(ride))
}
