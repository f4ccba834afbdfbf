use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::eta;
use crate::error::DispatchError;
use crate::models::customer::Customer;
use crate::models::driver::Driver;
use crate::models::ride::{Ride, RideStatus};
use crate::store::RideStore;

pub const SEED_DRIVER_NAME: &str = "Seed Driver";
pub const SEED_DRIVER_LOCATION: &str = "Downtown";

/// Owns the in-memory driver and ride collections. Every mutating
/// operation flushes through the store before it returns; if the flush
/// fails the in-memory change is rolled back, so memory and disk never
/// diverge. Callers are expected to serialize access (see `AppState`).
pub struct DispatchCore {
    drivers: Vec<Driver>,
    rides: Vec<Ride>,
    store: Box<dyn RideStore + Send>,
}

impl DispatchCore {
    /// Loads persisted state. An empty driver pool gets a single seed
    /// driver, persisted immediately, so the system is always bookable.
    pub fn new(store: Box<dyn RideStore + Send>) -> Result<Self, DispatchError> {
        let drivers = store.load_drivers()?;
        let rides = store.load_rides()?;
        let mut core = Self {
            drivers,
            rides,
            store,
        };

        if core.drivers.is_empty() {
            let seed = Driver::new(SEED_DRIVER_NAME, SEED_DRIVER_LOCATION);
            info!(driver_id = %seed.id, "no persisted drivers, seeding one");
            core.drivers.push(seed);
            core.store.save_drivers(&core.drivers)?;
        }

        Ok(core)
    }

    /// Books a ride for `customer`: first available driver in insertion
    /// order, ETA from the estimator, status `Assigned` straight away.
    pub fn book_ride(
        &mut self,
        customer: &mut Customer,
        pickup: &str,
        dropoff: &str,
    ) -> Result<Ride, DispatchError> {
        if pickup.trim().is_empty() || dropoff.trim().is_empty() {
            return Err(DispatchError::InvalidRequest(
                "pickup and dropoff locations are required".to_string(),
            ));
        }

        let slot = self
            .drivers
            .iter()
            .position(|driver| driver.available)
            .ok_or(DispatchError::NoDriverAvailable)?;
        let prior_driver = self.drivers[slot].clone();

        let ride = Ride {
            id: Uuid::new_v4(),
            customer_id: customer.id,
            driver_id: prior_driver.id,
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            status: RideStatus::Assigned,
            eta_minutes: eta::calculate_eta(&prior_driver.location, pickup),
            requested_at: Utc::now(),
        };

        let driver = &mut self.drivers[slot];
        driver.available = false;
        driver.current_ride = Some(ride.id);
        driver.updated_at = Utc::now();
        self.rides.push(ride.clone());

        if let Err(err) = self.persist() {
            warn!(ride_id = %ride.id, "flush failed, rolling back booking");
            self.rides.pop();
            self.drivers[slot] = prior_driver;
            return Err(err);
        }

        customer.ride_history.push(ride.id);
        info!(
            ride_id = %ride.id,
            driver_id = %ride.driver_id,
            customer_id = %customer.id,
            eta_minutes = ride.eta_minutes,
            "ride booked"
        );
        Ok(ride)
    }

    pub fn ride(&self, id: Uuid) -> Option<&Ride> {
        self.rides.iter().find(|ride| ride.id == id)
    }

    pub fn driver(&self, id: Uuid) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == id)
    }

    pub fn complete_ride(&mut self, id: Uuid) -> Result<Ride, DispatchError> {
        self.close_ride(id, RideStatus::Completed)
    }

    /// Cancellation keeps the record, marked `Cancelled`, and frees the
    /// driver exactly like completion does.
    pub fn cancel_ride(&mut self, id: Uuid) -> Result<Ride, DispatchError> {
        self.close_ride(id, RideStatus::Cancelled)
    }

    /// Snapshot of the ride collection in insertion order.
    pub fn all_rides(&self) -> Vec<Ride> {
        self.rides.clone()
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn available_driver_count(&self) -> usize {
        self.drivers.iter().filter(|driver| driver.available).count()
    }

    pub fn ride_count(&self) -> usize {
        self.rides.len()
    }

    fn close_ride(&mut self, id: Uuid, target: RideStatus) -> Result<Ride, DispatchError> {
        let slot = self
            .rides
            .iter()
            .position(|ride| ride.id == id)
            .ok_or(DispatchError::RideNotFound(id))?;

        let current = self.rides[slot].status;
        if current != RideStatus::Assigned {
            return Err(DispatchError::InvalidTransition {
                ride: id,
                status: current,
            });
        }

        // The driver may have been removed from the pool since assignment.
        let driver_id = self.rides[slot].driver_id;
        let driver_slot = self.drivers.iter().position(|driver| driver.id == driver_id);
        let prior_driver = driver_slot.map(|i| self.drivers[i].clone());

        self.rides[slot].status = target;
        if let Some(i) = driver_slot {
            let driver = &mut self.drivers[i];
            driver.available = true;
            driver.current_ride = None;
            driver.updated_at = Utc::now();
        }

        if let Err(err) = self.persist() {
            warn!(ride_id = %id, "flush failed, rolling back status change");
            self.rides[slot].status = current;
            if let (Some(i), Some(prior)) = (driver_slot, prior_driver) {
                self.drivers[i] = prior;
            }
            return Err(err);
        }

        info!(ride_id = %id, status = ?target, "ride closed");
        Ok(self.rides[slot].clone())
    }

    fn persist(&self) -> Result<(), DispatchError> {
        self.store.save_rides(&self.rides)?;
        self.store.save_drivers(&self.drivers)?;
        Ok(())
    }
}
