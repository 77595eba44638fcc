use grill_core::contract::{
    CreateOrderInput, Customer, Order, Position, RequestContext, CREATE_ORDER_METHOD,
};
use grill_core::delivery::build_order;
use grill_core::error::GrillError;
use grill_core::records::{decode_record, encode_record};
use serde_json::Value;
use tracing::{error, info};

use crate::adapters::record_store::RecordStore;
use crate::adapters::route_calculator::RouteCalculator;
use crate::handlers::api::{
    created_response, error_response, parse_body, path_parameter, ApiGatewayResponse,
};

/// API Gateway entry point for `POST /customers/{id}/orders`.
pub fn handle_create_order_event(
    event: &Value,
    origin: Position,
    store: &impl RecordStore,
    router: &impl RouteCalculator,
) -> ApiGatewayResponse {
    let context = RequestContext::new();
    info!(
        correlation_id = %context.correlation_id,
        method = CREATE_ORDER_METHOD,
        "started"
    );

    let result = path_parameter(event, "id")
        .ok_or_else(|| GrillError::validation("no id in the path parameters of the event"))
        .and_then(|customer_id| {
            let input = parse_body::<CreateOrderInput>(event, "no order supplied")?;
            place_order(customer_id, input, origin, &context, store, router)
        });

    match result {
        Ok(order) => created_response(&order, &context),
        Err(failure) => {
            error!(
                correlation_id = %context.correlation_id,
                method = CREATE_ORDER_METHOD,
                error = %failure,
                "request failed"
            );
            error_response(&failure, &context)
        }
    }
}

/// Routes from `origin` to the stored customer and persists the order with
/// its delivery metrics. The store write is the last step.
pub fn place_order(
    customer_id: &str,
    input: CreateOrderInput,
    origin: Position,
    context: &RequestContext,
    store: &impl RecordStore,
    router: &impl RouteCalculator,
) -> Result<Order, GrillError> {
    input.validate()?;

    info!(
        correlation_id = %context.correlation_id,
        method = CREATE_ORDER_METHOD,
        customer_id,
        "get customer"
    );
    let customer = load_customer(customer_id, store)?;

    let route = router
        .calculate_route(origin, customer.position())
        .map_err(GrillError::Upstream)?;

    let order = build_order(&customer.id, input, &route);
    info!(
        correlation_id = %context.correlation_id,
        method = CREATE_ORDER_METHOD,
        order_id = %order.id,
        distance = order.distance,
        distance_unit = %order.distance_unit,
        duration_in_minutes = order.duration_in_minutes,
        "order assembled"
    );

    let item = encode_record(&order).map_err(GrillError::Persistence)?;
    store.put_item(&item).map_err(GrillError::Persistence)?;

    Ok(order)
}

fn load_customer(customer_id: &str, store: &impl RecordStore) -> Result<Customer, GrillError> {
    let item = store
        .get_item(customer_id)
        .map_err(GrillError::Persistence)?
        .ok_or_else(|| GrillError::not_found("customer not found"))?;

    // Orders share the keyspace; an order id is not a customer.
    decode_record::<Customer>(item).map_err(|_| GrillError::not_found("customer not found"))
}
