use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BatteryLevel, DroneId, SerialNumber, TypeConstraintError, WeightLimit};

/// Battery charge a drone needs before it may be loaded or dispatched.
pub const MIN_OPERATING_BATTERY: i32 = 25;

/// Battery level at or below which a delivering drone turns back.
pub const RETURN_BATTERY_THRESHOLD: i32 = 20;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DroneModel {
    LightWeight,
    MiddleWeight,
    CruiserWeight,
    HeavyWeight,
}

impl DroneModel {
    /// Maximum cargo weight the airframe carries, in grams.
    pub const fn capacity(self) -> i32 {
        match self {
            DroneModel::LightWeight => 200,
            DroneModel::MiddleWeight => 300,
            DroneModel::CruiserWeight => 400,
            DroneModel::HeavyWeight => 500,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DroneModel::LightWeight => "LIGHT_WEIGHT",
            DroneModel::MiddleWeight => "MIDDLE_WEIGHT",
            DroneModel::CruiserWeight => "CRUISER_WEIGHT",
            DroneModel::HeavyWeight => "HEAVY_WEIGHT",
        }
    }
}

impl Display for DroneModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DroneModel {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIGHT_WEIGHT" => Ok(DroneModel::LightWeight),
            "MIDDLE_WEIGHT" => Ok(DroneModel::MiddleWeight),
            "CRUISER_WEIGHT" => Ok(DroneModel::CruiserWeight),
            "HEAVY_WEIGHT" => Ok(DroneModel::HeavyWeight),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown drone model '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DroneState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Delivering,
    Delivered,
    Returning,
}

impl DroneState {
    pub const fn as_str(self) -> &'static str {
        match self {
            DroneState::Idle => "IDLE",
            DroneState::Loading => "LOADING",
            DroneState::Loaded => "LOADED",
            DroneState::Delivering => "DELIVERING",
            DroneState::Delivered => "DELIVERED",
            DroneState::Returning => "RETURNING",
        }
    }
}

impl Display for DroneState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DroneState {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IDLE" => Ok(DroneState::Idle),
            "LOADING" => Ok(DroneState::Loading),
            "LOADED" => Ok(DroneState::Loaded),
            "DELIVERING" => Ok(DroneState::Delivering),
            "DELIVERED" => Ok(DroneState::Delivered),
            "RETURNING" => Ok(DroneState::Returning),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown drone state '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Drone {
    pub id: DroneId,
    pub serial_number: SerialNumber,
    pub model: DroneModel,
    pub weight_limit: WeightLimit,
    pub battery_capacity: BatteryLevel,
    pub state: DroneState,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Battery and state of a drone after one simulator step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DroneStatus {
    pub battery_capacity: BatteryLevel,
    pub state: DroneState,
}

impl Drone {
    /// Idle drones with enough charge can take a new job.
    pub fn is_available(&self) -> bool {
        self.state == DroneState::Idle && self.has_operating_battery()
    }

    pub fn has_operating_battery(&self) -> bool {
        self.battery_capacity.get() >= MIN_OPERATING_BATTERY
    }

    pub fn status(&self) -> DroneStatus {
        DroneStatus {
            battery_capacity: self.battery_capacity,
            state: self.state,
        }
    }

    /// Computes the status one simulator tick later.
    ///
    /// Delivering drones complete their delivery unless the battery falls to
    /// the return threshold, returning drones drain until empty and then count
    /// as idle, and loading drones drain slowly. Other states are stationary.
    pub fn simulate_step(&self) -> DroneStatus {
        let battery = self.battery_capacity;
        match self.state {
            DroneState::Delivering => {
                let battery = battery.drain(5);
                let state = if battery.get() <= RETURN_BATTERY_THRESHOLD {
                    DroneState::Returning
                } else {
                    DroneState::Delivered
                };
                DroneStatus {
                    battery_capacity: battery,
                    state,
                }
            }
            DroneState::Returning => {
                let battery = battery.drain(3);
                let state = if battery.get() == 0 {
                    DroneState::Idle
                } else {
                    DroneState::Returning
                };
                DroneStatus {
                    battery_capacity: battery,
                    state,
                }
            }
            DroneState::Loading => DroneStatus {
                battery_capacity: battery.drain(1),
                state: DroneState::Loading,
            },
            DroneState::Idle | DroneState::Loaded | DroneState::Delivered => self.status(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewDrone {
    pub serial_number: SerialNumber,
    pub model: DroneModel,
    pub weight_limit: WeightLimit,
    pub battery_capacity: BatteryLevel,
    pub state: DroneState,
}

impl NewDrone {
    #[must_use]
    pub fn new(
        serial_number: SerialNumber,
        model: DroneModel,
        weight_limit: WeightLimit,
        battery_capacity: Option<BatteryLevel>,
        state: Option<DroneState>,
    ) -> Self {
        Self {
            serial_number,
            model,
            weight_limit,
            battery_capacity: battery_capacity.unwrap_or_default(),
            state: state.unwrap_or_default(),
        }
    }

    /// Builds a drone from raw values, validating each of them.
    pub fn try_new(
        serial_number: impl Into<String>,
        model: DroneModel,
        weight_limit: i32,
        battery_capacity: Option<i32>,
        state: Option<DroneState>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            SerialNumber::new(serial_number)?,
            model,
            WeightLimit::new(weight_limit)?,
            battery_capacity.map(BatteryLevel::new).transpose()?,
            state,
        ))
    }
}
