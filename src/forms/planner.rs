//! Payload of the route planning endpoint.

use std::collections::HashSet;

use serde::Deserialize;
use validator::Validate;

use crate::{
    forms::FormError,
    planner::{Delivery, DeliveryPlanner, FleetDrone, Location},
};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct LocationForm {
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FleetDroneForm {
    pub drone_id: i32,
    #[validate(range(min = 0.0))]
    pub max_range: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max_capacity: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    pub speed: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct DeliveryForm {
    pub id: i64,
    #[validate(nested)]
    pub destination: LocationForm,
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
}

/// JSON body of `POST /api/routes/plan`.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct PlanRoutesForm {
    #[validate(nested)]
    pub base: LocationForm,
    #[serde(default)]
    #[validate(nested)]
    pub drones: Vec<FleetDroneForm>,
    #[serde(default)]
    #[validate(nested)]
    pub deliveries: Vec<DeliveryForm>,
}

impl From<LocationForm> for Location {
    fn from(form: LocationForm) -> Self {
        Location::new(form.name.trim(), form.x, form.y)
    }
}

impl From<FleetDroneForm> for FleetDrone {
    fn from(form: FleetDroneForm) -> Self {
        let mut drone = FleetDrone::new(form.drone_id);
        if let Some(max_range) = form.max_range {
            drone = drone.with_range(max_range);
        }
        if let Some(max_capacity) = form.max_capacity {
            drone = drone.with_capacity(max_capacity);
        }
        if let Some(speed) = form.speed {
            drone = drone.with_speed(speed);
        }
        drone
    }
}

impl TryFrom<PlanRoutesForm> for DeliveryPlanner {
    type Error = FormError;

    fn try_from(form: PlanRoutesForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut seen = HashSet::new();
        for delivery in &form.deliveries {
            if !seen.insert(delivery.id) {
                return Err(FormError::DuplicateDelivery(delivery.id));
            }
        }

        let mut planner = DeliveryPlanner::new(form.base.into());
        for drone in form.drones {
            planner.add_drone(drone.into());
        }
        for delivery in form.deliveries {
            planner.add_delivery(Delivery::new(
                delivery.id,
                delivery.destination.into(),
                delivery.weight,
            ));
        }

        Ok(planner)
    }
}
