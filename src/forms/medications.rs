//! Payloads describing medication items.

use serde::Deserialize;
use validator::Validate;

use crate::{domain::medication::NewMedication, forms::FormError};

/// A single medication as submitted by API clients.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct MedicationForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub weight: i32,
    #[validate(length(min = 1))]
    pub code: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl TryFrom<MedicationForm> for NewMedication {
    type Error = FormError;

    fn try_from(form: MedicationForm) -> Result<Self, Self::Error> {
        form.validate()?;

        NewMedication::try_new(form.name, form.weight, form.code, form.image)
            .map_err(|err| FormError::InvalidMedication(err.to_string()))
    }
}
