use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        drone::{Drone, DroneState, DroneStatus, NewDrone},
        medication::{Medication, NewMedication},
        types::{DroneId, MedicationId, SerialNumber},
    },
    repository::errors::RepositoryResult,
};

pub mod drone;
pub mod errors;
pub mod medication;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository shared by the HTTP handlers and the simulator.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait DroneReader {
    fn get_drone_by_id(&self, id: DroneId) -> RepositoryResult<Option<Drone>>;
    fn get_drone_by_serial_number(
        &self,
        serial_number: &SerialNumber,
    ) -> RepositoryResult<Option<Drone>>;
    fn list_drones(&self) -> RepositoryResult<Vec<Drone>>;
    fn list_drones_by_state(&self, state: DroneState) -> RepositoryResult<Vec<Drone>>;
    /// Sum of the weights of every medication currently loaded on the drone.
    fn drone_cargo_weight(&self, id: DroneId) -> RepositoryResult<i64>;
    fn count_drones(&self) -> RepositoryResult<usize>;
}

pub trait DroneWriter {
    fn create_drone(&self, new_drone: &NewDrone) -> RepositoryResult<Drone>;
    fn update_drone_status(&self, id: DroneId, status: DroneStatus) -> RepositoryResult<Drone>;
    /// Attaches the medications to the drone, moving it through `LOADING`
    /// into `LOADED` in a single transaction.
    ///
    /// Fails with [`errors::RepositoryError::BatteryTooLow`] or
    /// [`errors::RepositoryError::CapacityExceeded`] without writing anything when the
    /// drone cannot take the cargo.
    fn load_drone(&self, id: DroneId, medications: &[NewMedication]) -> RepositoryResult<Drone>;
}

pub trait MedicationReader {
    fn get_medication_by_id(&self, id: MedicationId) -> RepositoryResult<Option<Medication>>;
    fn list_medications(&self) -> RepositoryResult<Vec<Medication>>;
    fn list_drone_medications(&self, drone_id: DroneId) -> RepositoryResult<Vec<Medication>>;
}

pub trait MedicationWriter {
    fn create_medication(&self, new_medication: &NewMedication) -> RepositoryResult<Medication>;
}
