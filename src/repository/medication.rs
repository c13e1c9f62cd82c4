//! Repository implementation for medication items.

use diesel::prelude::*;

use crate::{
    domain::{
        medication::{Medication, NewMedication},
        types::{DroneId, MedicationId},
    },
    models::medication::{Medication as DbMedication, NewMedication as DbNewMedication},
    repository::{
        DieselRepository, MedicationReader, MedicationWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(db_medications: Vec<DbMedication>) -> RepositoryResult<Vec<Medication>> {
    db_medications
        .into_iter()
        .map(|db_medication| Medication::try_from(db_medication).map_err(RepositoryError::from))
        .collect()
}

impl MedicationReader for DieselRepository {
    fn get_medication_by_id(&self, id: MedicationId) -> RepositoryResult<Option<Medication>> {
        use crate::schema::medications;

        let mut conn = self.conn()?;
        let db_medication = medications::table
            .find(id.get())
            .first::<DbMedication>(&mut conn)
            .optional()?;

        match db_medication {
            Some(db_medication) => Ok(Some(Medication::try_from(db_medication)?)),
            None => Ok(None),
        }
    }

    fn list_medications(&self) -> RepositoryResult<Vec<Medication>> {
        use crate::schema::medications;

        let mut conn = self.conn()?;
        let db_medications = medications::table
            .order(medications::id.asc())
            .load::<DbMedication>(&mut conn)?;

        into_domain(db_medications)
    }

    fn list_drone_medications(&self, drone_id: DroneId) -> RepositoryResult<Vec<Medication>> {
        use crate::schema::medications;

        let mut conn = self.conn()?;
        let db_medications = medications::table
            .filter(medications::drone_id.eq(drone_id.get()))
            .order(medications::id.asc())
            .load::<DbMedication>(&mut conn)?;

        into_domain(db_medications)
    }
}

impl MedicationWriter for DieselRepository {
    fn create_medication(&self, new_medication: &NewMedication) -> RepositoryResult<Medication> {
        use crate::schema::medications;

        let mut conn = self.conn()?;
        let db_new_medication: DbNewMedication = new_medication.into();

        let db_medication = diesel::insert_into(medications::table)
            .values(&db_new_medication)
            .get_result::<DbMedication>(&mut conn)?;

        Ok(Medication::try_from(db_medication)?)
    }
}
