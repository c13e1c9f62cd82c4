use serde::Serialize;

use crate::planner::{Delivery, DeliveryRoute, PlanSummary};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDto {
    pub id: i64,
    pub destination: String,
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub drone_id: i32,
    pub deliveries: Vec<DeliveryDto>,
    pub total_distance: f64,
    pub flight_hours: f64,
}

/// Body of `POST /api/routes/plan`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummaryDto {
    pub total_routes: usize,
    pub total_deliveries: usize,
    pub total_distance: f64,
    pub pending_deliveries: usize,
    pub routes: Vec<RouteDto>,
}

impl From<Delivery> for DeliveryDto {
    fn from(delivery: Delivery) -> Self {
        Self {
            id: delivery.id,
            destination: delivery.destination.name,
            x: delivery.destination.x,
            y: delivery.destination.y,
            weight: delivery.weight,
        }
    }
}

impl From<DeliveryRoute> for RouteDto {
    fn from(route: DeliveryRoute) -> Self {
        Self {
            drone_id: route.drone_id,
            deliveries: route.deliveries.into_iter().map(Into::into).collect(),
            total_distance: route.total_distance,
            flight_hours: route.flight_hours,
        }
    }
}

impl From<PlanSummary> for PlanSummaryDto {
    fn from(summary: PlanSummary) -> Self {
        Self {
            total_routes: summary.total_routes,
            total_deliveries: summary.total_deliveries,
            total_distance: summary.total_distance,
            pending_deliveries: summary.pending_deliveries,
            routes: summary.routes.into_iter().map(Into::into).collect(),
        }
    }
}
