//! Request payloads accepted by the drone service API.

use thiserror::Error;
use validator::ValidationErrors;

pub mod drones;
pub mod medications;
pub mod planner;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid serial number")]
    InvalidSerialNumber,

    #[error("invalid weight limit")]
    InvalidWeightLimit,

    #[error("invalid battery capacity")]
    InvalidBatteryCapacity,

    #[error("Weight limit exceeds model capacity ({weight_limit} > {capacity})")]
    WeightLimitAboveCapacity { weight_limit: i32, capacity: i32 },

    #[error("invalid medication: {0}")]
    InvalidMedication(String),

    #[error("duplicate delivery id {0}")]
    DuplicateDelivery(i64),
}
