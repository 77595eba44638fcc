use aws_config::{BehaviorVersion, SdkConfig};
use grill_core::config::GrillConfig;
use grill_core::contract::Position;

use crate::adapters::dynamodb::DynamoRecordStore;
use crate::adapters::location::{LocationPlaceIndex, LocationRouteCalculator};
use crate::handlers::router::GrillServices;

pub type AwsServices =
    GrillServices<DynamoRecordStore, LocationPlaceIndex, LocationRouteCalculator>;

/// Collaborators of the `create_customer_lambda` binary.
pub struct CustomerServices {
    pub store: DynamoRecordStore,
    pub geocoder: LocationPlaceIndex,
}

/// Collaborators of the `create_order_lambda` binary.
pub struct OrderServices {
    pub origin: Position,
    pub store: DynamoRecordStore,
    pub router: LocationRouteCalculator,
}

/// Reads region and credentials from the ambient provider chain.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Builds every AWS-backed collaborator for the combined runtime.
pub async fn load_aws_services(config: &GrillConfig) -> AwsServices {
    aws_services(config, &load_sdk_config().await)
}

pub fn aws_services(config: &GrillConfig, sdk_config: &SdkConfig) -> AwsServices {
    let location_client = aws_sdk_location::Client::new(sdk_config);
    GrillServices {
        origin: config.origin,
        store: record_store(config, sdk_config),
        geocoder: LocationPlaceIndex::new(config.place_index.clone(), location_client.clone()),
        router: LocationRouteCalculator::new(config.route_calculator.clone(), location_client),
    }
}

pub fn customer_services(config: &GrillConfig, sdk_config: &SdkConfig) -> CustomerServices {
    CustomerServices {
        store: record_store(config, sdk_config),
        geocoder: LocationPlaceIndex::new(
            config.place_index.clone(),
            aws_sdk_location::Client::new(sdk_config),
        ),
    }
}

pub fn order_services(config: &GrillConfig, sdk_config: &SdkConfig) -> OrderServices {
    OrderServices {
        origin: config.origin,
        store: record_store(config, sdk_config),
        router: LocationRouteCalculator::new(
            config.route_calculator.clone(),
            aws_sdk_location::Client::new(sdk_config),
        ),
    }
}

fn record_store(config: &GrillConfig, sdk_config: &SdkConfig) -> DynamoRecordStore {
    DynamoRecordStore::new(
        config.table_name.clone(),
        aws_sdk_dynamodb::Client::new(sdk_config),
    )
}
