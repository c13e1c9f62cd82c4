//! Diesel models for stored drones.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::drone::{Drone as DomainDrone, DroneStatus, NewDrone as DomainNewDrone};
use crate::domain::types::{BatteryLevel, DroneId, SerialNumber, TypeConstraintError, WeightLimit};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::drones)]
/// Diesel model for [`crate::domain::drone::Drone`].
pub struct Drone {
    pub id: i32,
    pub serial_number: String,
    pub model: String,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::drones)]
/// Insertable form of [`Drone`].
pub struct NewDrone<'a> {
    pub serial_number: &'a str,
    pub model: &'static str,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: &'static str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::drones)]
/// Battery and state change written by the load, dispatch and simulator paths.
pub struct UpdateDroneStatus {
    pub battery_capacity: i32,
    pub state: &'static str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Drone> for DomainDrone {
    type Error = TypeConstraintError;

    fn try_from(drone: Drone) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DroneId::new(drone.id)?,
            serial_number: SerialNumber::new(drone.serial_number)?,
            model: drone.model.parse()?,
            weight_limit: WeightLimit::new(drone.weight_limit)?,
            battery_capacity: BatteryLevel::new(drone.battery_capacity)?,
            state: drone.state.parse()?,
            created_at: drone.created_at,
            updated_at: drone.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewDrone> for NewDrone<'a> {
    fn from(drone: &'a DomainNewDrone) -> Self {
        Self {
            serial_number: drone.serial_number.as_str(),
            model: drone.model.as_str(),
            weight_limit: drone.weight_limit.get(),
            battery_capacity: drone.battery_capacity.get(),
            state: drone.state.as_str(),
        }
    }
}

impl UpdateDroneStatus {
    pub fn new(status: DroneStatus, updated_at: NaiveDateTime) -> Self {
        Self {
            battery_capacity: status.battery_capacity.get(),
            state: status.state.as_str(),
            updated_at,
        }
    }
}
