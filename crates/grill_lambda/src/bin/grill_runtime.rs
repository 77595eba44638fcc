use grill_core::config::GrillConfig;
use grill_lambda::handlers::api::ApiGatewayResponse;
use grill_lambda::handlers::router::route_event;
use grill_lambda::runtime::{load_aws_services, AwsServices};
use grill_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    services: &AwsServices,
) -> Result<ApiGatewayResponse, Error> {
    Ok(route_event(&event.payload, services))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    let config = GrillConfig::from_env().map_err(|error| Error::from(error.to_string()))?;
    tracing::info!(
        table_name = %config.table_name,
        place_index = %config.place_index,
        route_calculator = %config.route_calculator,
        "configuration loaded"
    );
    let services = load_aws_services(&config).await;
    let services = &services;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, services).await
    }))
    .await
}
