use std::thread;
use std::time::{Duration, Instant};

use drone_service::domain::drone::{Drone, DroneState};
use drone_service::domain::types::DroneId;
use drone_service::repository::{DieselRepository, DroneReader};
use drone_service::services::seed::seed_demo_data;
use drone_service::services::simulator::{TickSummary, spawn_simulator, tick};

mod common;

fn drone(repo: &DieselRepository, id: i32) -> Drone {
    repo.get_drone_by_id(DroneId::new(id).unwrap())
        .unwrap()
        .unwrap()
}

#[test]
fn test_tick_persists_transitions() {
    let test_db = common::TestDb::new("test_tick_persists_transitions.db");
    let repo = test_db.repository();
    seed_demo_data(&repo).unwrap();

    let before = repo.list_drones().unwrap();
    // CURRENT_TIMESTAMP has second precision.
    thread::sleep(Duration::from_millis(1100));

    let summary = tick(&repo).unwrap();
    assert_eq!(
        summary,
        TickSummary {
            processed: 10,
            updated: 3
        }
    );

    // DR-004 was delivering at 50%.
    let delivered = drone(&repo, 4);
    assert_eq!(delivered.state, DroneState::Delivered);
    assert_eq!(delivered.battery_capacity.get(), 45);
    assert!(delivered.updated_at > before[3].updated_at);

    // DR-005 was returning at 15%.
    let returning = drone(&repo, 5);
    assert_eq!(returning.state, DroneState::Returning);
    assert_eq!(returning.battery_capacity.get(), 12);

    // DR-006 was loading at 99%.
    assert_eq!(drone(&repo, 6).battery_capacity.get(), 98);

    // Stationary drones are left untouched.
    let idle = drone(&repo, 1);
    assert_eq!(idle, before[0]);
}

#[test]
fn test_spawned_simulator_ticks_until_shutdown() {
    let test_db = common::TestDb::new("test_spawned_simulator.db");
    let repo = test_db.repository();
    seed_demo_data(&repo).unwrap();

    let handle = spawn_simulator(repo.clone(), Duration::from_millis(10));

    let deadline = Instant::now() + Duration::from_secs(10);
    while handle.ticks() < 3 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }

    let ticks = handle.shutdown();
    assert!(ticks >= 3, "simulator ran {ticks} tick(s)");

    let delivered = drone(&repo, 4);
    assert_eq!(delivered.state, DroneState::Delivered);
    assert_eq!(delivered.battery_capacity.get(), 45);

    let returning = drone(&repo, 5);
    let expected = (15 - 3 * ticks as i32).max(0);
    assert_eq!(returning.battery_capacity.get(), expected);

    // The loop is gone, so nothing changes any more.
    let settled = repo.list_drones().unwrap();
    thread::sleep(Duration::from_millis(50));
    assert_eq!(repo.list_drones().unwrap(), settled);
}
