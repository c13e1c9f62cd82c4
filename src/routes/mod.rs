//! REST handlers mounted under `/api`.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod drones;
pub mod medications;
pub mod planner;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps a service failure onto an HTTP status with a JSON error body.
///
/// `context` names the operation in the log line written for server errors.
pub fn error_response(err: ServiceError, context: &str) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::Conflict(_) => HttpResponse::Conflict().json(body),
        ServiceError::Repository(_) => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().json(ErrorBody {
                error: "Internal server error".to_string(),
            })
        }
    }
}

/// JSON extractor settings answering malformed bodies with a 400 error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody {
            error: err.to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

/// Path extractor settings: an id that is not a number names no resource, so
/// it is answered like any other unknown id.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::NotFound().json(ErrorBody {
            error: ServiceError::NotFound.to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

/// Registers every API handler on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(drones::register_drone)
        .service(drones::list_drones)
        // Must precede `/drones/{drone_id}`.
        .service(drones::available_drones)
        .service(drones::show_drone)
        .service(drones::load_drone)
        .service(drones::drone_medications)
        .service(drones::drone_battery)
        .service(drones::dispatch_drone)
        .service(medications::create_medication)
        .service(medications::list_medications)
        .service(medications::show_medication)
        .service(planner::plan_routes);
}
