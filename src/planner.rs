//! Greedy delivery route planning for a drone fleet.
//!
//! Every drone leaves the base with an empty hold and a full range budget and
//! repeatedly flies to the nearest pending delivery it can still complete
//! while keeping enough range to return to base. Deliveries that no drone can
//! take stay pending.

use serde::{Deserialize, Serialize};

/// A named point on the planning plane, in kilometres.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A parcel to drop at `destination`; weight in kilograms.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Delivery {
    pub id: i64,
    pub destination: Location,
    pub weight: f64,
}

impl Delivery {
    pub fn new(id: i64, destination: Location, weight: f64) -> Self {
        Self {
            id,
            destination,
            weight,
        }
    }
}

/// Flight envelope of a drone taking part in planning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FleetDrone {
    pub drone_id: i32,
    /// Maximum flight distance per sortie, in kilometres.
    pub max_range: f64,
    /// Maximum payload per sortie, in kilograms.
    pub max_capacity: f64,
    /// Cruise speed, in kilometres per hour.
    pub speed: f64,
}

impl FleetDrone {
    pub const DEFAULT_RANGE: f64 = 100.0;
    pub const DEFAULT_CAPACITY: f64 = 5.0;
    pub const DEFAULT_SPEED: f64 = 50.0;

    pub fn new(drone_id: i32) -> Self {
        Self {
            drone_id,
            max_range: Self::DEFAULT_RANGE,
            max_capacity: Self::DEFAULT_CAPACITY,
            speed: Self::DEFAULT_SPEED,
        }
    }

    #[must_use]
    pub fn with_range(mut self, max_range: f64) -> Self {
        self.max_range = max_range;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, max_capacity: f64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Starts a sortie from `base` with an empty hold.
    pub fn sortie<'a>(&'a self, base: &Location) -> Sortie<'a> {
        Sortie {
            drone: self,
            position: base.clone(),
            load: 0.0,
            distance_traveled: 0.0,
        }
    }
}

/// Progress of a single drone through one planned sortie.
#[derive(Debug)]
pub struct Sortie<'a> {
    drone: &'a FleetDrone,
    position: Location,
    load: f64,
    distance_traveled: f64,
}

impl Sortie<'_> {
    pub fn position(&self) -> &Location {
        &self.position
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Whether the drone can carry `delivery` on top of its current load and
    /// still make it back to `base` within its remaining range.
    pub fn can_deliver(&self, delivery: &Delivery, base: &Location) -> bool {
        if self.load + delivery.weight > self.drone.max_capacity {
            return false;
        }

        let to_destination = self.position.distance_to(&delivery.destination);
        let to_base = delivery.destination.distance_to(base);
        let remaining_range = self.drone.max_range - self.distance_traveled;

        to_destination + to_base <= remaining_range
    }

    /// Flies to the delivery destination and takes its weight on board,
    /// returning the leg distance.
    pub fn take(&mut self, delivery: &Delivery) -> f64 {
        let leg = self.position.distance_to(&delivery.destination);
        self.distance_traveled += leg;
        self.load += delivery.weight;
        self.position = delivery.destination.clone();
        leg
    }
}

/// Ordered deliveries assigned to one drone.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DeliveryRoute {
    pub drone_id: i32,
    pub deliveries: Vec<Delivery>,
    /// Round trip length from base through every stop and back, in kilometres.
    pub total_distance: f64,
    /// Flight time at the drone's cruise speed, in hours.
    pub flight_hours: f64,
}

impl DeliveryRoute {
    fn new(drone_id: i32) -> Self {
        Self {
            drone_id,
            deliveries: Vec::new(),
            total_distance: 0.0,
            flight_hours: 0.0,
        }
    }

    /// Length of the round trip base → stops in order → base.
    pub fn calculate_distance(&self, base: &Location) -> f64 {
        let Some(last) = self.deliveries.last() else {
            return 0.0;
        };

        let mut total = 0.0;
        let mut current = base;
        for delivery in &self.deliveries {
            total += current.distance_to(&delivery.destination);
            current = &delivery.destination;
        }

        total + last.destination.distance_to(base)
    }
}

/// Aggregate view over a planning run.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PlanSummary {
    pub total_routes: usize,
    pub total_deliveries: usize,
    pub total_distance: f64,
    pub pending_deliveries: usize,
    pub routes: Vec<DeliveryRoute>,
}

#[derive(Clone, Debug)]
pub struct DeliveryPlanner {
    base: Location,
    drones: Vec<FleetDrone>,
    pending_deliveries: Vec<Delivery>,
}

impl DeliveryPlanner {
    pub fn new(base: Location) -> Self {
        Self {
            base,
            drones: Vec::new(),
            pending_deliveries: Vec::new(),
        }
    }

    pub fn add_drone(&mut self, drone: FleetDrone) {
        self.drones.push(drone);
    }

    pub fn add_delivery(&mut self, delivery: Delivery) {
        self.pending_deliveries.push(delivery);
    }

    pub fn base(&self) -> &Location {
        &self.base
    }

    pub fn drones(&self) -> &[FleetDrone] {
        &self.drones
    }

    pub fn pending_deliveries(&self) -> &[Delivery] {
        &self.pending_deliveries
    }

    /// Assigns pending deliveries to drones with a nearest-neighbour sweep.
    ///
    /// Drones are used in the order they were added, one sortie each. Routes
    /// that end up empty are omitted and whatever could not be placed stays
    /// in [`Self::pending_deliveries`].
    pub fn plan_routes(&mut self) -> Vec<DeliveryRoute> {
        let mut remaining = std::mem::take(&mut self.pending_deliveries);
        let mut routes = Vec::new();

        for drone in &self.drones {
            if remaining.is_empty() {
                break;
            }

            let mut sortie = drone.sortie(&self.base);
            let mut route = DeliveryRoute::new(drone.drone_id);

            loop {
                let mut best: Option<(usize, f64)> = None;
                for (index, delivery) in remaining.iter().enumerate() {
                    if !sortie.can_deliver(delivery, &self.base) {
                        continue;
                    }
                    let distance = sortie.position().distance_to(&delivery.destination);
                    if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                        best = Some((index, distance));
                    }
                }

                let Some((index, _)) = best else {
                    break;
                };

                let delivery = remaining.remove(index);
                sortie.take(&delivery);
                route.deliveries.push(delivery);
            }

            if !route.deliveries.is_empty() {
                route.total_distance = route.calculate_distance(&self.base);
                route.flight_hours = if drone.speed > 0.0 {
                    route.total_distance / drone.speed
                } else {
                    0.0
                };
                routes.push(route);
            }
        }

        self.pending_deliveries = remaining;
        routes
    }

    pub fn summary(&self, routes: Vec<DeliveryRoute>) -> PlanSummary {
        PlanSummary {
            total_routes: routes.len(),
            total_deliveries: routes.iter().map(|route| route.deliveries.len()).sum(),
            total_distance: routes.iter().map(|route| route.total_distance).sum(),
            pending_deliveries: self.pending_deliveries.len(),
            routes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Location {
        Location::new("Base", 0.0, 0.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Location::new("A", 0.0, 0.0);
        let b = Location::new("B", 3.0, 4.0);
        assert_close(a.distance_to(&b), 5.0);
        assert_close(b.distance_to(&b), 0.0);
    }

    #[test]
    fn fleet_drone_defaults() {
        let drone = FleetDrone::new(1);
        assert_close(drone.max_range, 100.0);
        assert_close(drone.max_capacity, 5.0);
        assert_close(drone.speed, 50.0);
    }

    #[test]
    fn sortie_take_moves_and_accumulates() {
        let drone = FleetDrone::new(1);
        let mut sortie = drone.sortie(&origin());
        let leg = sortie.take(&Delivery::new(1, Location::new("B", 3.0, 4.0), 1.5));
        assert_close(leg, 5.0);
        assert_close(sortie.distance_traveled(), 5.0);
        assert_close(sortie.load(), 1.5);
        assert_eq!(sortie.position().name, "B");
    }

    #[test]
    fn can_deliver_within_range() {
        let drone = FleetDrone::new(1).with_range(100.0).with_capacity(5.0);
        let sortie = drone.sortie(&origin());
        let delivery = Delivery::new(1, Location::new("Dest", 10.0, 10.0), 2.0);
        assert!(sortie.can_deliver(&delivery, &origin()));
    }

    #[test]
    fn cannot_deliver_over_capacity() {
        let drone = FleetDrone::new(1).with_capacity(5.0);
        let sortie = drone.sortie(&origin());
        let delivery = Delivery::new(1, Location::new("Dest", 10.0, 10.0), 10.0);
        assert!(!sortie.can_deliver(&delivery, &origin()));
    }

    #[test]
    fn cannot_deliver_out_of_range() {
        let drone = FleetDrone::new(1).with_range(50.0);
        let sortie = drone.sortie(&origin());
        let delivery = Delivery::new(1, Location::new("Dest", 60.0, 60.0), 2.0);
        assert!(!sortie.can_deliver(&delivery, &origin()));
    }

    #[test]
    fn route_distance_is_a_round_trip() {
        let mut route = DeliveryRoute::new(1);
        assert_close(route.calculate_distance(&origin()), 0.0);

        route
            .deliveries
            .push(Delivery::new(1, Location::new("D1", 3.0, 4.0), 2.0));
        assert_close(route.calculate_distance(&origin()), 10.0);

        route
            .deliveries
            .push(Delivery::new(2, Location::new("D2", 6.0, 8.0), 2.0));
        assert_close(route.calculate_distance(&origin()), 20.0);
    }

    #[test]
    fn single_drone_takes_everything_reachable() {
        let mut planner = DeliveryPlanner::new(origin());
        planner.add_drone(FleetDrone::new(1).with_capacity(10.0));
        planner.add_delivery(Delivery::new(1, Location::new("A", 10.0, 10.0), 2.0));
        planner.add_delivery(Delivery::new(2, Location::new("B", 20.0, 5.0), 3.0));

        let routes = planner.plan_routes();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].deliveries.len(), 2);
        assert!(planner.pending_deliveries().is_empty());
        assert_close(
            routes[0].flight_hours,
            routes[0].total_distance / FleetDrone::DEFAULT_SPEED,
        );
    }

    #[test]
    fn nearest_delivery_goes_first() {
        let mut planner = DeliveryPlanner::new(origin());
        planner.add_drone(FleetDrone::new(1).with_capacity(10.0));
        planner.add_delivery(Delivery::new(1, Location::new("Far", 20.0, 0.0), 1.0));
        planner.add_delivery(Delivery::new(2, Location::new("Near", 5.0, 0.0), 1.0));

        let routes = planner.plan_routes();

        let order: Vec<i64> = routes[0].deliveries.iter().map(|d| d.id).collect();
        assert_eq!(order, vec![2, 1]);
        assert_close(routes[0].total_distance, 40.0);
    }

    #[test]
    fn overweight_delivery_stays_pending() {
        let mut planner = DeliveryPlanner::new(origin());
        planner.add_drone(FleetDrone::new(1).with_range(200.0).with_capacity(3.0));
        planner.add_delivery(Delivery::new(1, Location::new("A", 10.0, 10.0), 5.0));

        let routes = planner.plan_routes();

        assert!(routes.is_empty());
        assert_eq!(planner.pending_deliveries().len(), 1);
    }

    #[test]
    fn capacity_is_cumulative_within_a_sortie() {
        let mut planner = DeliveryPlanner::new(origin());
        planner.add_drone(FleetDrone::new(1).with_range(200.0).with_capacity(5.0));
        planner.add_delivery(Delivery::new(1, Location::new("A", 5.0, 5.0), 2.0));
        planner.add_delivery(Delivery::new(2, Location::new("B", 10.0, 10.0), 2.0));
        planner.add_delivery(Delivery::new(3, Location::new("C", 15.0, 15.0), 2.0));

        let routes = planner.plan_routes();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].deliveries.len(), 2);
        assert_eq!(planner.pending_deliveries().len(), 1);
        assert_eq!(planner.pending_deliveries()[0].id, 3);
    }

    #[test]
    fn second_drone_picks_up_the_rest() {
        let mut planner = DeliveryPlanner::new(origin());
        planner.add_drone(FleetDrone::new(1).with_capacity(5.0));
        planner.add_drone(FleetDrone::new(2).with_capacity(5.0));
        planner.add_delivery(Delivery::new(1, Location::new("A", 10.0, 10.0), 2.0));
        planner.add_delivery(Delivery::new(2, Location::new("B", 20.0, 5.0), 3.0));
        planner.add_delivery(Delivery::new(3, Location::new("C", 15.0, 20.0), 1.5));

        let routes = planner.plan_routes();
        let summary = planner.summary(routes);

        assert_eq!(summary.total_routes, 2);
        assert_eq!(summary.total_deliveries, 3);
        assert_eq!(summary.pending_deliveries, 0);
        assert_eq!(summary.routes[0].drone_id, 1);
        assert_eq!(summary.routes[1].drone_id, 2);
        let sum: f64 = summary.routes.iter().map(|r| r.total_distance).sum();
        assert_close(summary.total_distance, sum);
    }

    #[test]
    fn unreachable_location_stays_pending() {
        let mut planner = DeliveryPlanner::new(origin());
        planner.add_drone(FleetDrone::new(1).with_range(30.0));
        planner.add_delivery(Delivery::new(1, Location::new("Far", 50.0, 50.0), 2.0));

        let routes = planner.plan_routes();
        let summary = planner.summary(routes);

        assert_eq!(summary.total_routes, 0);
        assert_eq!(summary.total_deliveries, 0);
        assert_eq!(summary.pending_deliveries, 1);
        assert_close(summary.total_distance, 0.0);
    }

    #[test]
    fn planning_without_drones_keeps_everything_pending() {
        let mut planner = DeliveryPlanner::new(origin());
        planner.add_delivery(Delivery::new(1, Location::new("A", 1.0, 1.0), 1.0));

        assert!(planner.plan_routes().is_empty());
        assert_eq!(planner.pending_deliveries().len(), 1);
        assert!(planner.drones().is_empty());
    }
}
