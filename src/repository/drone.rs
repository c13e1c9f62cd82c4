//! Repository implementation for registered drones.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        drone::{Drone, DroneState, DroneStatus, NewDrone},
        medication::{NewMedication, total_weight},
        types::{DroneId, SerialNumber},
    },
    models::{
        drone::{Drone as DbDrone, NewDrone as DbNewDrone, UpdateDroneStatus},
        medication::NewMedication as DbNewMedication,
    },
    repository::{
        DieselRepository, DroneReader, DroneWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(db_drones: Vec<DbDrone>) -> RepositoryResult<Vec<Drone>> {
    db_drones
        .into_iter()
        .map(|db_drone| Drone::try_from(db_drone).map_err(RepositoryError::from))
        .collect()
}

fn cargo_weight(conn: &mut SqliteConnection, id: DroneId) -> RepositoryResult<i64> {
    use crate::schema::medications;

    let weights = medications::table
        .filter(medications::drone_id.eq(id.get()))
        .select(medications::weight)
        .load::<i32>(conn)?;

    Ok(weights.into_iter().map(i64::from).sum())
}

impl DroneReader for DieselRepository {
    fn get_drone_by_id(&self, id: DroneId) -> RepositoryResult<Option<Drone>> {
        use crate::schema::drones;

        let mut conn = self.conn()?;
        let db_drone = drones::table
            .find(id.get())
            .first::<DbDrone>(&mut conn)
            .optional()?;

        match db_drone {
            Some(db_drone) => Ok(Some(Drone::try_from(db_drone)?)),
            None => Ok(None),
        }
    }

    fn get_drone_by_serial_number(
        &self,
        serial_number: &SerialNumber,
    ) -> RepositoryResult<Option<Drone>> {
        use crate::schema::drones;

        let mut conn = self.conn()?;
        let db_drone = drones::table
            .filter(drones::serial_number.eq(serial_number.as_str()))
            .first::<DbDrone>(&mut conn)
            .optional()?;

        match db_drone {
            Some(db_drone) => Ok(Some(Drone::try_from(db_drone)?)),
            None => Ok(None),
        }
    }

    fn list_drones(&self) -> RepositoryResult<Vec<Drone>> {
        use crate::schema::drones;

        let mut conn = self.conn()?;
        let db_drones = drones::table
            .order(drones::id.asc())
            .load::<DbDrone>(&mut conn)?;

        into_domain(db_drones)
    }

    fn list_drones_by_state(&self, state: DroneState) -> RepositoryResult<Vec<Drone>> {
        use crate::schema::drones;

        let mut conn = self.conn()?;
        let db_drones = drones::table
            .filter(drones::state.eq(state.as_str()))
            .order(drones::id.asc())
            .load::<DbDrone>(&mut conn)?;

        into_domain(db_drones)
    }

    fn drone_cargo_weight(&self, id: DroneId) -> RepositoryResult<i64> {
        let mut conn = self.conn()?;
        cargo_weight(&mut conn, id)
    }

    fn count_drones(&self) -> RepositoryResult<usize> {
        use crate::schema::drones;

        let mut conn = self.conn()?;
        let total = drones::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl DroneWriter for DieselRepository {
    fn create_drone(&self, new_drone: &NewDrone) -> RepositoryResult<Drone> {
        use crate::schema::drones;

        let mut conn = self.conn()?;
        let db_new_drone: DbNewDrone = new_drone.into();

        let db_drone = diesel::insert_into(drones::table)
            .values(&db_new_drone)
            .get_result::<DbDrone>(&mut conn)?;

        Ok(Drone::try_from(db_drone)?)
    }

    fn update_drone_status(&self, id: DroneId, status: DroneStatus) -> RepositoryResult<Drone> {
        use crate::schema::drones;

        let mut conn = self.conn()?;
        let changes = UpdateDroneStatus::new(status, Utc::now().naive_utc());

        let db_drone = diesel::update(drones::table.find(id.get()))
            .set(&changes)
            .get_result::<DbDrone>(&mut conn)?;

        Ok(Drone::try_from(db_drone)?)
    }

    fn load_drone(&self, id: DroneId, medications: &[NewMedication]) -> RepositoryResult<Drone> {
        use crate::schema::{drones, medications as medications_table};

        let mut conn = self.conn()?;

        let cargo = medications
            .iter()
            .map(|medication| {
                let mut db_medication: DbNewMedication = medication.into();
                db_medication.drone_id = Some(id.get());
                db_medication
            })
            .collect::<Vec<_>>();
        let incoming = total_weight(medications);

        // The write lock is taken up front so the checks and the insert see
        // the same cargo.
        let db_drone = conn.immediate_transaction::<DbDrone, RepositoryError, _>(|conn| {
            let drone = Drone::try_from(drones::table.find(id.get()).first::<DbDrone>(conn)?)?;

            if !drone.has_operating_battery() {
                return Err(RepositoryError::BatteryTooLow);
            }
            if cargo_weight(conn, id)? + incoming > i64::from(drone.model.capacity()) {
                return Err(RepositoryError::CapacityExceeded);
            }

            diesel::update(drones::table.find(id.get()))
                .set((
                    drones::state.eq(DroneState::Loading.as_str()),
                    drones::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)?;

            if !cargo.is_empty() {
                diesel::insert_into(medications_table::table)
                    .values(&cargo)
                    .execute(conn)?;
            }

            Ok(diesel::update(drones::table.find(id.get()))
                .set((
                    drones::state.eq(DroneState::Loaded.as_str()),
                    drones::updated_at.eq(Utc::now().naive_utc()),
                ))
                .get_result::<DbDrone>(conn)?)
        })?;

        Ok(Drone::try_from(db_drone)?)
    }
}
