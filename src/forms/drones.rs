//! Payloads for registering and loading drones.

use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::{
        drone::{DroneModel, NewDrone},
        medication::NewMedication,
        types::{BatteryLevel, SerialNumber, WeightLimit},
    },
    forms::{FormError, medications::MedicationForm},
};

/// JSON body of `POST /api/drones`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDroneForm {
    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,
    pub model: DroneModel,
    /// Bounds are enforced by [`WeightLimit`].
    pub weight_limit: i32,
    /// Bounds are enforced by [`BatteryLevel`].
    pub battery_capacity: Option<i32>,
}

/// Validated registration data.
pub struct RegisterDronePayload {
    pub new_drone: NewDrone,
}

impl TryFrom<RegisterDroneForm> for RegisterDronePayload {
    type Error = FormError;

    fn try_from(form: RegisterDroneForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let serial_number =
            SerialNumber::new(form.serial_number).map_err(|_| FormError::InvalidSerialNumber)?;
        let weight_limit =
            WeightLimit::new(form.weight_limit).map_err(|_| FormError::InvalidWeightLimit)?;
        let battery_capacity = form
            .battery_capacity
            .map(BatteryLevel::new)
            .transpose()
            .map_err(|_| FormError::InvalidBatteryCapacity)?;

        let capacity = form.model.capacity();
        if weight_limit.get() > capacity {
            return Err(FormError::WeightLimitAboveCapacity {
                weight_limit: weight_limit.get(),
                capacity,
            });
        }

        Ok(Self {
            new_drone: NewDrone::new(serial_number, form.model, weight_limit, battery_capacity, None),
        })
    }
}

/// JSON body of `POST /api/drones/{id}/load`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoadDroneForm {
    #[serde(default)]
    #[validate(nested)]
    pub medications: Vec<MedicationForm>,
}

/// Validated cargo, not yet attached to a drone.
pub struct LoadDronePayload {
    pub medications: Vec<NewMedication>,
}

impl TryFrom<LoadDroneForm> for LoadDronePayload {
    type Error = FormError;

    fn try_from(form: LoadDroneForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let medications = form
            .medications
            .into_iter()
            .map(NewMedication::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { medications })
    }
}
