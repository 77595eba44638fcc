use grill_core::config::GrillConfig;
use grill_lambda::handlers::api::ApiGatewayResponse;
use grill_lambda::handlers::customer::handle_create_customer_event;
use grill_lambda::runtime::{customer_services, load_sdk_config, CustomerServices};
use grill_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    services: &CustomerServices,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_create_customer_event(
        &event.payload,
        &services.store,
        &services.geocoder,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    let config = GrillConfig::from_env().map_err(|error| Error::from(error.to_string()))?;
    let services = customer_services(&config, &load_sdk_config().await);
    let services = &services;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, services).await
    }))
    .await
}
