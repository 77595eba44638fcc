use crate::contract::{new_record_id, CreateOrderInput, Order, Position, RouteSummary};

/// The restaurant every order is delivered from.
pub const RESTAURANT_POSITION: Position = Position {
    longitude: -1.61236,
    latitude: 54.96999,
};

/// Whole minutes for a route duration, halves rounded up.
pub fn duration_in_minutes(duration_seconds: f64) -> u64 {
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return 0;
    }
    (duration_seconds / 60.0).round() as u64
}

/// Assembles a new order with a fresh identifier and the route metrics.
pub fn build_order(customer_id: &str, input: CreateOrderInput, route: &RouteSummary) -> Order {
    Order {
        id: new_record_id(),
        customer_id: customer_id.to_string(),
        product_id: input.product_id,
        distance: route.distance,
        distance_unit: route.distance_unit.clone(),
        duration_in_minutes: duration_in_minutes(route.duration_seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_minute() {
        assert_eq!(duration_in_minutes(723.0), 12);
        assert_eq!(duration_in_minutes(749.0), 12);
        assert_eq!(duration_in_minutes(751.0), 13);
    }

    #[test]
    fn half_minute_rounds_up() {
        assert_eq!(duration_in_minutes(30.0), 1);
        assert_eq!(duration_in_minutes(90.0), 2);
    }

    #[test]
    fn non_positive_or_invalid_durations_are_zero() {
        assert_eq!(duration_in_minutes(0.0), 0);
        assert_eq!(duration_in_minutes(-10.0), 0);
        assert_eq!(duration_in_minutes(f64::NAN), 0);
    }

    #[test]
    fn build_order_copies_route_metrics() {
        let route = RouteSummary {
            distance: 5.0,
            distance_unit: "Kilometers".to_string(),
            duration_seconds: 723.0,
        };
        let order = build_order(
            "cust-1",
            CreateOrderInput {
                product_id: "burger".to_string(),
            },
            &route,
        );

        assert!(!order.id.is_empty());
        assert_eq!(order.customer_id, "cust-1");
        assert_eq!(order.product_id, "burger");
        assert_eq!(order.distance, 5.0);
        assert_eq!(order.distance_unit, "Kilometers");
        assert_eq!(order.duration_in_minutes, 12);
    }
}
