//! Periodic battery and state simulation of the fleet.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::repository::{DroneReader, DroneWriter};
use crate::services::ServiceResult;

/// Outcome of one simulator pass over the fleet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Drones the step was applied to.
    pub processed: usize,
    /// Drones whose battery or state changed and were written back.
    pub updated: usize,
}

/// Advances every drone by one simulation step and persists the drones
/// whose battery or state changed.
pub fn tick<R>(repo: &R) -> ServiceResult<TickSummary>
where
    R: DroneReader + DroneWriter + ?Sized,
{
    let mut summary = TickSummary::default();

    for drone in repo.list_drones()? {
        summary.processed += 1;

        let next = drone.simulate_step();
        if next == drone.status() {
            continue;
        }

        repo.update_drone_status(drone.id, next)?;
        log::debug!(
            "Drone #{}: {} {}% -> {} {}%",
            drone.id,
            drone.state,
            drone.battery_capacity,
            next.state,
            next.battery_capacity
        );
        summary.updated += 1;
    }

    log::debug!(
        "Simulator processed {} drone(s), updated {}",
        summary.processed,
        summary.updated
    );

    Ok(summary)
}

/// Handle to the background simulator thread.
pub struct SimulatorHandle {
    stop: Arc<AtomicBool>,
    ticks: Arc<AtomicUsize>,
    thread: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Number of passes finished so far, failed ones included.
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Acquire)
    }

    /// Asks the loop to exit after the current sleep and waits for it.
    /// Returns the number of passes the loop ran.
    pub fn shutdown(self) -> usize {
        self.stop.store(true, Ordering::Release);
        self.thread.thread().unpark();
        if self.thread.join().is_err() {
            log::error!("Simulator thread panicked");
        }
        self.ticks.load(Ordering::Acquire)
    }
}

/// Starts the simulator on its own thread.
///
/// The first tick runs immediately, subsequent ones `interval` after the
/// previous tick finished. Failures are logged and the loop keeps going.
pub fn spawn_simulator<R>(repo: R, interval: Duration) -> SimulatorHandle
where
    R: DroneReader + DroneWriter + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let ticks = Arc::new(AtomicUsize::new(0));
    let (flag, counter) = (Arc::clone(&stop), Arc::clone(&ticks));

    let thread = thread::spawn(move || {
        log::info!("Drone simulator started, interval {interval:?}");
        while !flag.load(Ordering::Acquire) {
            if let Err(err) = tick(&repo) {
                log::error!("Simulator tick failed: {err}");
            }
            counter.fetch_add(1, Ordering::Release);
            thread::park_timeout(interval);
        }
        log::info!("Drone simulator stopped");
    });

    SimulatorHandle {
        stop,
        ticks,
        thread,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::drone::{Drone, DroneModel, DroneState};
    use crate::domain::types::{BatteryLevel, DroneId, SerialNumber, WeightLimit};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn drone(id: i32, battery: i32, state: DroneState) -> Drone {
        let now = Utc::now().naive_utc();
        Drone {
            id: DroneId::new(id).unwrap(),
            serial_number: SerialNumber::new(format!("SIM-{id}")).unwrap(),
            model: DroneModel::HeavyWeight,
            weight_limit: WeightLimit::new(500).unwrap(),
            battery_capacity: BatteryLevel::new(battery).unwrap(),
            state,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn tick_persists_only_changed_drones() {
        let mut repo = MockRepository::new();
        repo.expect_list_drones().returning(|| {
            Ok(vec![
                drone(1, 100, DroneState::Idle),
                drone(2, 50, DroneState::Delivering),
                drone(3, 15, DroneState::Returning),
                drone(4, 60, DroneState::Loaded),
            ])
        });
        repo.expect_update_drone_status()
            .times(2)
            .returning(|id, status| Ok(drone(id.get(), status.battery_capacity.get(), status.state)));

        assert_eq!(
            tick(&repo).unwrap(),
            TickSummary {
                processed: 4,
                updated: 2
            }
        );
    }

    #[test]
    fn tick_applies_delivery_transition() {
        let mut repo = MockRepository::new();
        repo.expect_list_drones()
            .returning(|| Ok(vec![drone(4, 50, DroneState::Delivering)]));
        repo.expect_update_drone_status()
            .times(1)
            .withf(|id, status| {
                id.get() == 4
                    && status.battery_capacity.get() == 45
                    && status.state == DroneState::Delivered
            })
            .returning(|id, status| Ok(drone(id.get(), status.battery_capacity.get(), status.state)));

        assert_eq!(tick(&repo).unwrap().updated, 1);
    }

    #[test]
    fn tick_turns_back_low_battery_deliveries() {
        let mut repo = MockRepository::new();
        repo.expect_list_drones()
            .returning(|| Ok(vec![drone(5, 24, DroneState::Delivering)]));
        repo.expect_update_drone_status()
            .times(1)
            .withf(|_, status| {
                status.battery_capacity.get() == 19 && status.state == DroneState::Returning
            })
            .returning(|id, status| Ok(drone(id.get(), status.battery_capacity.get(), status.state)));

        assert_eq!(tick(&repo).unwrap().updated, 1);
    }

    #[test]
    fn tick_over_empty_fleet_processes_nothing() {
        let mut repo = MockRepository::new();
        repo.expect_list_drones().returning(|| Ok(Vec::new()));
        repo.expect_update_drone_status().never();

        assert_eq!(tick(&repo).unwrap(), TickSummary::default());
    }

    #[test]
    fn tick_stops_on_repository_error() {
        let mut repo = MockRepository::new();
        repo.expect_list_drones()
            .returning(|| Err(RepositoryError::ConnectionError("down".to_string())));
        repo.expect_update_drone_status().never();

        assert!(matches!(tick(&repo), Err(ServiceError::Repository(_))));
    }
}
