//! Demo fleet inserted into an empty database.

use crate::domain::drone::{DroneModel, DroneState, NewDrone};
use crate::domain::medication::NewMedication;
use crate::repository::{DroneReader, DroneWriter, MedicationWriter};
use crate::services::ServiceResult;

const DEMO_DRONES: [(&str, DroneModel, i32, i32, DroneState); 10] = [
    ("DR-001", DroneModel::LightWeight, 200, 100, DroneState::Idle),
    ("DR-002", DroneModel::MiddleWeight, 300, 80, DroneState::Idle),
    ("DR-003", DroneModel::CruiserWeight, 400, 60, DroneState::Loaded),
    ("DR-004", DroneModel::HeavyWeight, 500, 50, DroneState::Delivering),
    ("DR-005", DroneModel::HeavyWeight, 500, 15, DroneState::Returning),
    ("DR-006", DroneModel::LightWeight, 200, 99, DroneState::Loading),
    ("DR-007", DroneModel::MiddleWeight, 300, 30, DroneState::Idle),
    ("DR-008", DroneModel::CruiserWeight, 400, 25, DroneState::Idle),
    ("DR-009", DroneModel::MiddleWeight, 300, 10, DroneState::Idle),
    ("DR-010", DroneModel::HeavyWeight, 500, 100, DroneState::Idle),
];

/// (name, weight, code, carrier serial number)
const DEMO_MEDICATIONS: [(&str, i32, &str, &str); 2] = [
    ("MedA", 50, "MEDA_1", "DR-003"),
    ("MedB", 100, "MEDB_2", "DR-004"),
];

/// Seeds the demo fleet when no drones exist yet.
///
/// Returns `true` when data was inserted.
pub fn seed_demo_data<R>(repo: &R) -> ServiceResult<bool>
where
    R: DroneReader + DroneWriter + MedicationWriter + ?Sized,
{
    if repo.count_drones()? > 0 {
        log::debug!("Drones already present, skipping demo data");
        return Ok(false);
    }

    let mut carriers = Vec::with_capacity(DEMO_DRONES.len());
    for (serial_number, model, weight_limit, battery, state) in DEMO_DRONES {
        let new_drone =
            NewDrone::try_new(serial_number, model, weight_limit, Some(battery), Some(state))?;
        let drone = repo.create_drone(&new_drone)?;
        carriers.push((serial_number, drone.id));
    }

    for (name, weight, code, carrier) in DEMO_MEDICATIONS {
        let mut new_medication = NewMedication::try_new(name, weight, code, None)?;
        if let Some((_, drone_id)) = carriers.iter().find(|(serial, _)| *serial == carrier) {
            new_medication = new_medication.attached_to(*drone_id);
        }
        repo.create_medication(&new_medication)?;
    }

    log::info!(
        "Seeded {} demo drones and {} medications",
        DEMO_DRONES.len(),
        DEMO_MEDICATIONS.len()
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::Utc;

    use super::*;
    use crate::domain::drone::Drone;
    use crate::domain::medication::Medication;
    use crate::domain::types::{DroneId, MedicationId};
    use crate::repository::mock::MockRepository;

    #[test]
    fn skips_populated_database() {
        let mut repo = MockRepository::new();
        repo.expect_count_drones().returning(|| Ok(3));
        repo.expect_create_drone().never();
        repo.expect_create_medication().never();

        assert!(!seed_demo_data(&repo).unwrap());
    }

    #[test]
    fn seeds_fleet_and_attaches_cargo() {
        let mut repo = MockRepository::new();
        let next_id = Cell::new(0);
        repo.expect_count_drones().returning(|| Ok(0));
        repo.expect_create_drone()
            .times(10)
            .returning(move |new| {
                next_id.set(next_id.get() + 1);
                let now = Utc::now().naive_utc();
                Ok(Drone {
                    id: DroneId::new(next_id.get()).unwrap(),
                    serial_number: new.serial_number.clone(),
                    model: new.model,
                    weight_limit: new.weight_limit,
                    battery_capacity: new.battery_capacity,
                    state: new.state,
                    created_at: now,
                    updated_at: now,
                })
            });
        repo.expect_create_medication()
            .times(2)
            .withf(|new| matches!(new.drone_id.map(DroneId::get), Some(3) | Some(4)))
            .returning(|new| {
                Ok(Medication {
                    id: MedicationId::new(1).unwrap(),
                    name: new.name.clone(),
                    weight: new.weight,
                    code: new.code.clone(),
                    image: new.image.clone(),
                    drone_id: new.drone_id,
                })
            });

        assert!(seed_demo_data(&repo).unwrap());
    }
}
