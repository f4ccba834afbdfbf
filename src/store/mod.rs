//! Persistence gateway: the only component that touches the filesystem.
//!
//! Each collection is written as a whole (overwrite, not an append log).
//! Writes go to a sibling temp file and are renamed into place, so a crash
//! mid-write leaves the previous file intact.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::driver::Driver;
use crate::models::ride::Ride;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait RideStore {
    fn load_drivers(&self) -> Result<Vec<Driver>, StoreError>;
    fn load_rides(&self) -> Result<Vec<Ride>, StoreError>;
    fn save_drivers(&self, drivers: &[Driver]) -> Result<(), StoreError>;
    fn save_rides(&self, rides: &[Ride]) -> Result<(), StoreError>;
}

/// One JSON file per collection under `dir`.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn drivers_path(&self) -> PathBuf {
        self.dir.join("drivers.json")
    }

    fn rides_path(&self) -> PathBuf {
        self.dir.join("rides.json")
    }

    fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save<T: Serialize>(&self, path: &Path, items: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl RideStore for JsonFileStore {
    fn load_drivers(&self) -> Result<Vec<Driver>, StoreError> {
        Self::load(&self.drivers_path())
    }

    fn load_rides(&self) -> Result<Vec<Ride>, StoreError> {
        Self::load(&self.rides_path())
    }

    fn save_drivers(&self, drivers: &[Driver]) -> Result<(), StoreError> {
        self.save(&self.drivers_path(), drivers)
    }

    fn save_rides(&self, rides: &[Ride]) -> Result<(), StoreError> {
        self.save(&self.rides_path(), rides)
    }
}
