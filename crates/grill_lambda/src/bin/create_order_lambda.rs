use grill_core::config::GrillConfig;
use grill_lambda::handlers::api::ApiGatewayResponse;
use grill_lambda::handlers::order::handle_create_order_event;
use grill_lambda::runtime::{load_sdk_config, order_services, OrderServices};
use grill_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    services: &OrderServices,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_create_order_event(
        &event.payload,
        services.origin,
        &services.store,
        &services.router,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    let config = GrillConfig::from_env().map_err(|error| Error::from(error.to_string()))?;
    let services = order_services(&config, &load_sdk_config().await);
    let services = &services;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, services).await
    }))
    .await
}
