use grill_core::contract::{
    new_record_id, CreateCustomerInput, Customer, GeocodedPlace, RequestContext,
    CREATE_CUSTOMER_METHOD,
};
use grill_core::error::GrillError;
use grill_core::records::encode_record;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::adapters::geocoder::Geocoder;
use crate::adapters::record_store::RecordStore;
use crate::handlers::api::{created_response, error_response, parse_body, ApiGatewayResponse};

/// API Gateway entry point for `POST /customers`.
pub fn handle_create_customer_event(
    event: &Value,
    store: &impl RecordStore,
    geocoder: &impl Geocoder,
) -> ApiGatewayResponse {
    let context = RequestContext::new();
    info!(
        correlation_id = %context.correlation_id,
        method = CREATE_CUSTOMER_METHOD,
        "started"
    );

    let result = parse_body::<CreateCustomerInput>(event, "no customer supplied")
        .and_then(|input| register_customer(input, &context, store, geocoder));

    match result {
        Ok(customer) => created_response(&customer, &context),
        Err(failure) => {
            error!(
                correlation_id = %context.correlation_id,
                method = CREATE_CUSTOMER_METHOD,
                error = %failure,
                "request failed"
            );
            error_response(&failure, &context)
        }
    }
}

/// Geocodes the postcode and persists a new customer. The store write is
/// the last step, so any failure leaves nothing behind.
pub fn register_customer(
    input: CreateCustomerInput,
    context: &RequestContext,
    store: &impl RecordStore,
    geocoder: &impl Geocoder,
) -> Result<Customer, GrillError> {
    input.validate()?;

    let results = geocoder
        .search_text(&input.post_code)
        .map_err(GrillError::Upstream)?;
    let first = results.into_iter().next().ok_or_else(|| {
        GrillError::upstream(format!(
            "no geocoding results for postcode '{}'",
            input.post_code
        ))
    })?;

    let place = GeocodedPlace::from(first);
    if place.defaulted_position {
        warn!(
            correlation_id = %context.correlation_id,
            method = CREATE_CUSTOMER_METHOD,
            post_code = %input.post_code,
            "geocode result has no point, using zero coordinate"
        );
    }

    let customer = Customer::from_input(new_record_id(), input, &place);
    info!(
        correlation_id = %context.correlation_id,
        method = CREATE_CUSTOMER_METHOD,
        customer_id = %customer.id,
        longitude = customer.longitude,
        latitude = customer.latitude,
        "customer assembled"
    );

    let item = encode_record(&customer).map_err(GrillError::Persistence)?;
    store.put_item(&item).map_err(GrillError::Persistence)?;

    Ok(customer)
}
