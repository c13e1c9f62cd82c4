//! JSON shapes returned by the REST API.

pub mod drones;
pub mod medications;
pub mod planner;
