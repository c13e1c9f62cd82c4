//! Database models shared across the drone repository.

#[cfg(feature = "server")]
pub mod config;
pub mod drone;
pub mod medication;
