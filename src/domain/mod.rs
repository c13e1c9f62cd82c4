//! Domain aggregates exposed by the drone service layer.

pub mod drone;
pub mod medication;
pub mod types;
