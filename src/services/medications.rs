use crate::domain::medication::{Medication, NewMedication};
use crate::domain::types::MedicationId;
use crate::forms::medications::MedicationForm;
use crate::repository::{MedicationReader, MedicationWriter};
use crate::services::{ServiceError, ServiceResult};

/// Stores a medication that is not yet attached to any drone.
pub fn create_medication<R>(repo: &R, form: MedicationForm) -> ServiceResult<Medication>
where
    R: MedicationWriter + ?Sized,
{
    let new_medication = NewMedication::try_from(form)?;
    let medication = repo.create_medication(&new_medication)?;
    log::info!("Created medication {} as #{}", medication.code, medication.id);
    Ok(medication)
}

pub fn get_medication<R>(repo: &R, medication_id: i32) -> ServiceResult<Medication>
where
    R: MedicationReader + ?Sized,
{
    let medication_id = MedicationId::new(medication_id).map_err(|_| ServiceError::NotFound)?;
    repo.get_medication_by_id(medication_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_medications<R>(repo: &R) -> ServiceResult<Vec<Medication>>
where
    R: MedicationReader + ?Sized,
{
    Ok(repo.list_medications()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{DroneId, MedicationCode, MedicationName, MedicationWeight};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn stored(id: i32, drone_id: Option<i32>) -> Medication {
        Medication {
            id: MedicationId::new(id).unwrap(),
            name: MedicationName::new("MedA").unwrap(),
            weight: MedicationWeight::new(50).unwrap(),
            code: MedicationCode::new("MEDA_1").unwrap(),
            image: None,
            drone_id: drone_id.map(|id| DroneId::new(id).unwrap()),
        }
    }

    #[test]
    fn create_persists_unattached_medication() {
        let mut repo = MockRepository::new();
        repo.expect_create_medication()
            .times(1)
            .withf(|new| new.drone_id.is_none() && new.image.as_deref() == Some("  "))
            .returning(|_| Ok(stored(11, None)));

        let form = MedicationForm {
            name: "MedA".to_string(),
            weight: 50,
            code: "MEDA_1".to_string(),
            image: Some("  ".to_string()),
        };

        let medication = create_medication(&repo, form).unwrap();
        assert_eq!(medication.id.get(), 11);
    }

    #[test]
    fn create_rejects_invalid_name() {
        let mut repo = MockRepository::new();
        repo.expect_create_medication().never();

        let form = MedicationForm {
            name: "Med A!".to_string(),
            weight: 50,
            code: "MEDA".to_string(),
            image: None,
        };

        assert!(matches!(
            create_medication(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn get_unknown_medication_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_medication_by_id().returning(|_| Ok(None));

        assert!(matches!(get_medication(&repo, 3), Err(ServiceError::NotFound)));
        assert!(matches!(get_medication(&repo, -1), Err(ServiceError::NotFound)));
    }

    #[test]
    fn list_propagates_repository_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_medications()
            .returning(|| Err(RepositoryError::Unexpected("boom".to_string())));

        assert!(matches!(
            list_medications(&repo),
            Err(ServiceError::Repository(_))
        ));
    }
}
