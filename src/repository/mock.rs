//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::drone::{Drone, DroneState, DroneStatus, NewDrone};
use crate::domain::medication::{Medication, NewMedication};
use crate::domain::types::{DroneId, MedicationId, SerialNumber};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DroneReader, DroneWriter, MedicationReader, MedicationWriter};

mock! {
    pub Repository {}

    impl DroneReader for Repository {
        fn get_drone_by_id(&self, id: DroneId) -> RepositoryResult<Option<Drone>>;
        fn get_drone_by_serial_number(
            &self,
            serial_number: &SerialNumber,
        ) -> RepositoryResult<Option<Drone>>;
        fn list_drones(&self) -> RepositoryResult<Vec<Drone>>;
        fn list_drones_by_state(&self, state: DroneState) -> RepositoryResult<Vec<Drone>>;
        fn drone_cargo_weight(&self, id: DroneId) -> RepositoryResult<i64>;
        fn count_drones(&self) -> RepositoryResult<usize>;
    }

    impl DroneWriter for Repository {
        fn create_drone(&self, new_drone: &NewDrone) -> RepositoryResult<Drone>;
        fn update_drone_status(&self, id: DroneId, status: DroneStatus) -> RepositoryResult<Drone>;
        fn load_drone(&self, id: DroneId, medications: &[NewMedication]) -> RepositoryResult<Drone>;
    }

    impl MedicationReader for Repository {
        fn get_medication_by_id(&self, id: MedicationId) -> RepositoryResult<Option<Medication>>;
        fn list_medications(&self) -> RepositoryResult<Vec<Medication>>;
        fn list_drone_medications(&self, drone_id: DroneId) -> RepositoryResult<Vec<Medication>>;
    }

    impl MedicationWriter for Repository {
        fn create_medication(&self, new_medication: &NewMedication) -> RepositoryResult<Medication>;
    }
}
