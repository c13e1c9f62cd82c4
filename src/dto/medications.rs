use serde::Serialize;

use crate::domain::medication::Medication;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDto {
    pub id: i32,
    pub name: String,
    pub weight: i32,
    pub code: String,
    pub image: Option<String>,
    pub drone_id: Option<i32>,
}

impl From<Medication> for MedicationDto {
    fn from(medication: Medication) -> Self {
        Self {
            id: medication.id.get(),
            name: medication.name.into_inner(),
            weight: medication.weight.get(),
            code: medication.code.into_inner(),
            image: medication.image,
            drone_id: medication.drone_id.map(|id| id.get()),
        }
    }
}
