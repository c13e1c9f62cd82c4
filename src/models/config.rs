//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

fn default_simulator_interval_ms() -> u64 {
    60_000
}

fn default_seed_demo_data() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server, database and background simulator.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Delay between two simulator ticks, in milliseconds.
    #[serde(default = "default_simulator_interval_ms")]
    pub simulator_interval_ms: u64,
    /// Populate an empty database with the demo fleet on startup.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl ServerConfig {
    pub fn simulator_interval(&self) -> Duration {
        Duration::from_millis(self.simulator_interval_ms)
    }
}
