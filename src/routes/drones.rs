use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::drones::{BatteryDto, DroneDto};
use crate::dto::medications::MedicationDto;
use crate::forms::drones::{LoadDroneForm, RegisterDroneForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::drones as drones_service;

#[post("/drones")]
pub async fn register_drone(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RegisterDroneForm>,
) -> impl Responder {
    match drones_service::register_drone(repo.get_ref(), form) {
        Ok(drone) => HttpResponse::Created().json(DroneDto::from(drone)),
        Err(err) => error_response(err, "Failed to register drone"),
    }
}

#[get("/drones")]
pub async fn list_drones(repo: web::Data<DieselRepository>) -> impl Responder {
    match drones_service::list_drones(repo.get_ref()) {
        Ok(drones) => {
            HttpResponse::Ok().json(drones.into_iter().map(DroneDto::from).collect::<Vec<_>>())
        }
        Err(err) => error_response(err, "Failed to list drones"),
    }
}

#[get("/drones/available")]
pub async fn available_drones(repo: web::Data<DieselRepository>) -> impl Responder {
    match drones_service::available_drones(repo.get_ref()) {
        Ok(drones) => {
            HttpResponse::Ok().json(drones.into_iter().map(DroneDto::from).collect::<Vec<_>>())
        }
        Err(err) => error_response(err, "Failed to list available drones"),
    }
}

#[get("/drones/{drone_id}")]
pub async fn show_drone(
    drone_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match drones_service::get_drone(repo.get_ref(), drone_id.into_inner()) {
        Ok(drone) => HttpResponse::Ok().json(DroneDto::from(drone)),
        Err(err) => error_response(err, "Failed to load drone"),
    }
}

#[post("/drones/{drone_id}/load")]
pub async fn load_drone(
    drone_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LoadDroneForm>,
) -> impl Responder {
    match drones_service::load_drone(repo.get_ref(), drone_id.into_inner(), form) {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err, "Failed to load medications"),
    }
}

#[get("/drones/{drone_id}/medications")]
pub async fn drone_medications(
    drone_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match drones_service::drone_medications(repo.get_ref(), drone_id.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(
            items
                .into_iter()
                .map(MedicationDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err, "Failed to list drone medications"),
    }
}

#[get("/drones/{drone_id}/battery")]
pub async fn drone_battery(
    drone_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match drones_service::drone_battery(repo.get_ref(), drone_id.into_inner()) {
        Ok(level) => HttpResponse::Ok().json(BatteryDto::from(level)),
        Err(err) => error_response(err, "Failed to read battery level"),
    }
}

#[post("/drones/{drone_id}/dispatch")]
pub async fn dispatch_drone(
    drone_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match drones_service::dispatch_drone(repo.get_ref(), drone_id.into_inner()) {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err, "Failed to dispatch drone"),
    }
}
