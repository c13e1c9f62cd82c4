//! Services implementing the drone registry workflows.

use crate::domain::drone::{Drone, DroneState, DroneStatus};
use crate::domain::medication::{Medication, total_weight};
use crate::domain::types::{BatteryLevel, DroneId};
use crate::forms::drones::{LoadDroneForm, LoadDronePayload, RegisterDroneForm, RegisterDronePayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{DroneReader, DroneWriter, MedicationReader};
use crate::services::{ServiceError, ServiceResult};

fn find_drone<R>(repo: &R, drone_id: i32) -> ServiceResult<Drone>
where
    R: DroneReader + ?Sized,
{
    let drone_id = DroneId::new(drone_id).map_err(|_| ServiceError::NotFound)?;
    repo.get_drone_by_id(drone_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the registration form and stores a new idle drone.
pub fn register_drone<R>(repo: &R, form: RegisterDroneForm) -> ServiceResult<Drone>
where
    R: DroneReader + DroneWriter + ?Sized,
{
    let payload = RegisterDronePayload::try_from(form)?;

    if repo
        .get_drone_by_serial_number(&payload.new_drone.serial_number)?
        .is_some()
    {
        return Err(ServiceError::Conflict(
            "Serial number already exists".to_string(),
        ));
    }

    match repo.create_drone(&payload.new_drone) {
        Ok(drone) => {
            log::info!("Registered drone {} as #{}", drone.serial_number, drone.id);
            Ok(drone)
        }
        // Lost a race with a concurrent registration of the same serial.
        Err(RepositoryError::ConstraintViolation(_)) => Err(ServiceError::Conflict(
            "Serial number already exists".to_string(),
        )),
        Err(err) => Err(err.into()),
    }
}

pub fn get_drone<R>(repo: &R, drone_id: i32) -> ServiceResult<Drone>
where
    R: DroneReader + ?Sized,
{
    find_drone(repo, drone_id)
}

pub fn list_drones<R>(repo: &R) -> ServiceResult<Vec<Drone>>
where
    R: DroneReader + ?Sized,
{
    Ok(repo.list_drones()?)
}

/// Idle drones with enough battery to take a new job.
pub fn available_drones<R>(repo: &R) -> ServiceResult<Vec<Drone>>
where
    R: DroneReader + ?Sized,
{
    let drones = repo.list_drones_by_state(DroneState::Idle)?;
    Ok(drones.into_iter().filter(Drone::is_available).collect())
}

/// Loads the submitted medications onto the drone.
///
/// The drone needs an operating battery and the combined cargo must fit the
/// airframe capacity of its model. The repository repeats both checks inside
/// the write transaction. On success the drone is `LOADED`.
pub fn load_drone<R>(repo: &R, drone_id: i32, form: LoadDroneForm) -> ServiceResult<Drone>
where
    R: DroneReader + DroneWriter + ?Sized,
{
    let drone = find_drone(repo, drone_id)?;

    if !drone.has_operating_battery() {
        return Err(ServiceError::Conflict("Battery too low to load".to_string()));
    }

    let payload = LoadDronePayload::try_from(form)?;

    let incoming = total_weight(&payload.medications);
    if incoming > i64::from(drone.model.capacity()) {
        return Err(ServiceError::Conflict("Exceeds capacity".to_string()));
    }

    let loaded = repo.load_drone(drone.id, &payload.medications)?;
    log::info!(
        "Loaded {} item(s), {incoming}g, onto drone #{}",
        payload.medications.len(),
        loaded.id
    );

    Ok(loaded)
}

/// Medications currently attached to the drone.
pub fn drone_medications<R>(repo: &R, drone_id: i32) -> ServiceResult<Vec<Medication>>
where
    R: MedicationReader + ?Sized,
{
    match DroneId::new(drone_id) {
        Ok(drone_id) => Ok(repo.list_drone_medications(drone_id)?),
        Err(_) => Ok(Vec::new()),
    }
}

pub fn drone_battery<R>(repo: &R, drone_id: i32) -> ServiceResult<BatteryLevel>
where
    R: DroneReader + ?Sized,
{
    Ok(find_drone(repo, drone_id)?.battery_capacity)
}

/// Sends a loaded drone out for delivery.
pub fn dispatch_drone<R>(repo: &R, drone_id: i32) -> ServiceResult<Drone>
where
    R: DroneReader + DroneWriter + ?Sized,
{
    let drone = find_drone(repo, drone_id)?;

    if drone.state != DroneState::Loaded {
        return Err(ServiceError::Conflict("Drone not loaded".to_string()));
    }
    if !drone.has_operating_battery() {
        return Err(ServiceError::Conflict(
            "Battery too low to dispatch".to_string(),
        ));
    }

    let dispatched = repo.update_drone_status(
        drone.id,
        DroneStatus {
            battery_capacity: drone.battery_capacity,
            state: DroneState::Delivering,
        },
    )?;
    log::info!("Dispatched drone #{}", dispatched.id);

    Ok(dispatched)
}
