use serde::{Deserialize, Serialize};

use crate::domain::types::{
    DroneId, MedicationCode, MedicationId, MedicationName, MedicationWeight, TypeConstraintError,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: MedicationId,
    pub name: MedicationName,
    pub weight: MedicationWeight,
    pub code: MedicationCode,
    /// Picture of the package, either a URL or an encoded image.
    pub image: Option<String>,
    /// Drone carrying this item, if it has been loaded.
    pub drone_id: Option<DroneId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewMedication {
    pub name: MedicationName,
    pub weight: MedicationWeight,
    pub code: MedicationCode,
    pub image: Option<String>,
    pub drone_id: Option<DroneId>,
}

impl NewMedication {
    #[must_use]
    pub fn new(
        name: MedicationName,
        weight: MedicationWeight,
        code: MedicationCode,
        image: Option<String>,
    ) -> Self {
        Self {
            name,
            weight,
            code,
            image,
            drone_id: None,
        }
    }

    /// Builds a medication from raw values, validating each of them.
    pub fn try_new(
        name: impl Into<String>,
        weight: i32,
        code: impl Into<String>,
        image: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            MedicationName::new(name)?,
            MedicationWeight::new(weight)?,
            MedicationCode::new(code)?,
            image,
        ))
    }

    #[must_use]
    pub fn attached_to(mut self, drone_id: DroneId) -> Self {
        self.drone_id = Some(drone_id);
        self
    }
}

/// Total weight of the given items, in grams.
pub fn total_weight<'a>(items: impl IntoIterator<Item = &'a NewMedication>) -> i64 {
    items
        .into_iter()
        .map(|item| i64::from(item.weight.get()))
        .sum()
}
