//! Diesel models for medication items and drone cargo.

use diesel::prelude::*;

use crate::domain::medication::{
    Medication as DomainMedication, NewMedication as DomainNewMedication,
};
use crate::domain::types::{
    DroneId, MedicationCode, MedicationId, MedicationName, MedicationWeight, TypeConstraintError,
};
use crate::models::drone::Drone;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Drone, foreign_key = drone_id))]
#[diesel(table_name = crate::schema::medications)]
pub struct Medication {
    pub id: i32,
    pub name: String,
    pub weight: i32,
    pub code: String,
    pub image: Option<String>,
    pub drone_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::medications)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewMedication<'a> {
    pub name: &'a str,
    pub weight: i32,
    pub code: &'a str,
    pub image: Option<&'a str>,
    pub drone_id: Option<i32>,
}

impl TryFrom<Medication> for DomainMedication {
    type Error = TypeConstraintError;

    fn try_from(medication: Medication) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MedicationId::new(medication.id)?,
            name: MedicationName::new(medication.name)?,
            weight: MedicationWeight::new(medication.weight)?,
            code: MedicationCode::new(medication.code)?,
            image: medication.image,
            drone_id: medication.drone_id.map(DroneId::new).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewMedication> for NewMedication<'a> {
    fn from(medication: &'a DomainNewMedication) -> Self {
        Self {
            name: medication.name.as_str(),
            weight: medication.weight.get(),
            code: medication.code.as_str(),
            image: medication.image.as_deref(),
            drone_id: medication.drone_id.map(DroneId::get),
        }
    }
}
