use serde::Serialize;

use crate::domain::drone::{Drone, DroneModel, DroneState};
use crate::domain::types::BatteryLevel;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DroneDto {
    pub id: i32,
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: DroneState,
}

impl From<Drone> for DroneDto {
    fn from(drone: Drone) -> Self {
        Self {
            id: drone.id.get(),
            serial_number: drone.serial_number.into_inner(),
            model: drone.model,
            weight_limit: drone.weight_limit.get(),
            battery_capacity: drone.battery_capacity.get(),
            state: drone.state,
        }
    }
}

/// Body of `GET /api/drones/{id}/battery`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatteryDto {
    pub battery_capacity: i32,
}

impl From<BatteryLevel> for BatteryDto {
    fn from(level: BatteryLevel) -> Self {
        Self {
            battery_capacity: level.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_serializes_camel_case() {
        let dto = BatteryDto::from(BatteryLevel::new(42).unwrap());
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({"batteryCapacity": 42})
        );
    }
}
