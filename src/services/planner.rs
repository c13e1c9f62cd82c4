use crate::forms::planner::PlanRoutesForm;
use crate::planner::{DeliveryPlanner, PlanSummary};
use crate::services::ServiceResult;

/// Runs the route planner over the submitted fleet and deliveries.
///
/// Planning is stateless: nothing is read from or written to storage.
pub fn plan_routes(form: PlanRoutesForm) -> ServiceResult<PlanSummary> {
    let mut planner = DeliveryPlanner::try_from(form)?;
    let routes = planner.plan_routes();
    let summary = planner.summary(routes);

    log::debug!(
        "Planned {} route(s), {} delivery(ies) left pending",
        summary.total_routes,
        summary.pending_deliveries
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;

    #[test]
    fn plans_with_leftovers() {
        let form: PlanRoutesForm = serde_json::from_str(
            r#"{
                "base": {"name": "Warehouse", "x": 0, "y": 0},
                "drones": [{"droneId": 1, "maxCapacity": 5}],
                "deliveries": [
                    {"id": 1, "destination": {"x": 3, "y": 4}, "weight": 2},
                    {"id": 2, "destination": {"x": 6, "y": 8}, "weight": 2},
                    {"id": 3, "destination": {"x": 1, "y": 1}, "weight": 4}
                ]
            }"#,
        )
        .unwrap();

        let summary = plan_routes(form).unwrap();

        assert_eq!(summary.total_routes, 1);
        assert_eq!(summary.pending_deliveries + summary.total_deliveries, 3);
        assert!(summary.pending_deliveries >= 1);
    }

    #[test]
    fn duplicate_ids_are_form_errors() {
        let form: PlanRoutesForm = serde_json::from_str(
            r#"{
                "base": {"x": 0, "y": 0},
                "drones": [{"droneId": 1}],
                "deliveries": [
                    {"id": 1, "destination": {"x": 1, "y": 1}, "weight": 1},
                    {"id": 1, "destination": {"x": 2, "y": 2}, "weight": 1}
                ]
            }"#,
        )
        .unwrap();

        assert!(matches!(plan_routes(form), Err(ServiceError::Form(_))));
    }

    #[test]
    fn no_drones_leaves_everything_pending() {
        let form: PlanRoutesForm = serde_json::from_str(
            r#"{
                "base": {"x": 0, "y": 0},
                "deliveries": [{"id": 1, "destination": {"x": 1, "y": 1}, "weight": 1}]
            }"#,
        )
        .unwrap();

        let summary = plan_routes(form).unwrap();
        assert_eq!(summary.total_routes, 0);
        assert_eq!(summary.pending_deliveries, 1);
        assert_eq!(summary.total_distance, 0.0);
    }
}
