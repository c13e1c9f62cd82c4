use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::planner::PlanSummaryDto;
use crate::forms::planner::PlanRoutesForm;
use crate::routes::error_response;
use crate::services::planner as planner_service;

#[post("/routes/plan")]
pub async fn plan_routes(web::Json(form): web::Json<PlanRoutesForm>) -> impl Responder {
    match planner_service::plan_routes(form) {
        Ok(summary) => HttpResponse::Ok().json(PlanSummaryDto::from(summary)),
        Err(err) => error_response(err, "Failed to plan routes"),
    }
}
