use grill_core::contract::{Position, RouteSummary};

pub trait RouteCalculator: Send + Sync {
    fn calculate_route(
        &self,
        departure: Position,
        destination: Position,
    ) -> Result<RouteSummary, String>;
}
