use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::medications::MedicationDto;
use crate::forms::medications::MedicationForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::medications as medications_service;

#[post("/medications")]
pub async fn create_medication(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<MedicationForm>,
) -> impl Responder {
    match medications_service::create_medication(repo.get_ref(), form) {
        Ok(medication) => HttpResponse::Created().json(MedicationDto::from(medication)),
        Err(err) => error_response(err, "Failed to create medication"),
    }
}

#[get("/medications")]
pub async fn list_medications(repo: web::Data<DieselRepository>) -> impl Responder {
    match medications_service::list_medications(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(
            items
                .into_iter()
                .map(MedicationDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err, "Failed to list medications"),
    }
}

#[get("/medications/{medication_id}")]
pub async fn show_medication(
    medication_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match medications_service::get_medication(repo.get_ref(), medication_id.into_inner()) {
        Ok(medication) => HttpResponse::Ok().json(MedicationDto::from(medication)),
        Err(err) => error_response(err, "Failed to load medication"),
    }
}
