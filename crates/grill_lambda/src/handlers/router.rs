use grill_core::contract::{Position, RequestContext};
use serde_json::{json, Value};

use crate::adapters::geocoder::Geocoder;
use crate::adapters::record_store::RecordStore;
use crate::adapters::route_calculator::RouteCalculator;
use crate::handlers::api::{raw_error_response, ApiGatewayResponse};
use crate::handlers::customer::handle_create_customer_event;
use crate::handlers::order::handle_create_order_event;

/// Collaborators constructed once at cold start and shared by every
/// invocation.
pub struct GrillServices<S, G, R> {
    pub origin: Position,
    pub store: S,
    pub geocoder: G,
    pub router: R,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CreateCustomer,
    CreateOrder { customer_id: Option<String> },
}

/// Matches `POST /customers` and `POST /customers/{id}/orders`, preferring
/// the proxy `resource` template over the raw `path`.
pub fn resolve_route(event: &Value) -> Option<Route> {
    let method = event.get("httpMethod").and_then(Value::as_str)?;
    if !method.eq_ignore_ascii_case("POST") {
        return None;
    }

    if let Some(resource) = event.get("resource").and_then(Value::as_str) {
        return match segments(resource).as_slice() {
            ["customers"] => Some(Route::CreateCustomer),
            ["customers", "{id}", "orders"] => Some(Route::CreateOrder { customer_id: None }),
            _ => None,
        };
    }

    let path = event.get("path").and_then(Value::as_str)?;
    match segments(path).as_slice() {
        ["customers"] => Some(Route::CreateCustomer),
        ["customers", id, "orders"] => Some(Route::CreateOrder {
            customer_id: Some((*id).to_string()),
        }),
        _ => None,
    }
}

pub fn route_event<S, G, R>(
    event: &Value,
    services: &GrillServices<S, G, R>,
) -> ApiGatewayResponse
where
    S: RecordStore,
    G: Geocoder,
    R: RouteCalculator,
{
    match resolve_route(event) {
        Some(Route::CreateCustomer) => {
            handle_create_customer_event(event, &services.store, &services.geocoder)
        }
        Some(Route::CreateOrder { customer_id }) => {
            let event = with_path_id(event, customer_id);
            handle_create_order_event(&event, services.origin, &services.store, &services.router)
        }
        None => {
            let context = RequestContext::new();
            let path = event
                .get("path")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default();
            tracing::warn!(
                correlation_id = %context.correlation_id,
                path = %path,
                "no route for event"
            );
            raw_error_response(
                404,
                "route_not_found",
                "no handler for this method and path",
                &context.correlation_id,
            )
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

fn with_path_id(event: &Value, customer_id: Option<String>) -> Value {
    let mut event = event.clone();
    let Some(id) = customer_id else {
        return event;
    };

    if let Some(object) = event.as_object_mut() {
        match object.get_mut("pathParameters") {
            Some(Value::Object(parameters)) => {
                parameters.entry("id").or_insert(Value::String(id));
            }
            _ => {
                object.insert("pathParameters".to_string(), json!({ "id": id }));
            }
        }
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_routes_from_resource_template() {
        let customer = json!({"httpMethod": "POST", "resource": "/customers"});
        let order = json!({"httpMethod": "POST", "resource": "/customers/{id}/orders"});

        assert_eq!(resolve_route(&customer), Some(Route::CreateCustomer));
        assert_eq!(
            resolve_route(&order),
            Some(Route::CreateOrder { customer_id: None })
        );
    }

    #[test]
    fn resolves_order_route_from_raw_path() {
        let event = json!({"httpMethod": "post", "path": "/customers/cust-9/orders/"});
        assert_eq!(
            resolve_route(&event),
            Some(Route::CreateOrder {
                customer_id: Some("cust-9".to_string())
            })
        );
    }

    #[test]
    fn rejects_other_methods_and_paths() {
        assert_eq!(
            resolve_route(&json!({"httpMethod": "GET", "resource": "/customers"})),
            None
        );
        assert_eq!(
            resolve_route(&json!({"httpMethod": "POST", "path": "/orders"})),
            None
        );
        assert_eq!(resolve_route(&json!({"resource": "/customers"})), None);
    }

    #[test]
    fn path_id_is_injected_only_when_absent() {
        let bare = with_path_id(&json!({"body": "{}"}), Some("cust-1".to_string()));
        assert_eq!(bare["pathParameters"]["id"], json!("cust-1"));

        let existing = with_path_id(
            &json!({"pathParameters": {"id": "cust-2"}}),
            Some("cust-1".to_string()),
        );
        assert_eq!(existing["pathParameters"]["id"], json!("cust-2"));
    }

    #[test]
    fn path_id_is_merged_into_existing_parameters() {
        let event = with_path_id(
            &json!({"pathParameters": {"other": "x"}}),
            Some("cust-1".to_string()),
        );
        assert_eq!(
            event["pathParameters"],
            json!({"other": "x", "id": "cust-1"})
        );

        let null_parameters = with_path_id(
            &json!({"pathParameters": null}),
            Some("cust-1".to_string()),
        );
        assert_eq!(null_parameters["pathParameters"]["id"], json!("cust-1"));
    }

    #[test]
    fn unknown_route_answers_not_found() {
        use crate::test_helpers::{InMemoryRecordStore, StubGeocoder, StubRouteCalculator};

        let services = GrillServices {
            origin: Position::ZERO,
            store: InMemoryRecordStore::new(),
            geocoder: StubGeocoder::returning(Vec::new()),
            router: StubRouteCalculator::returning(0.0, "Kilometers", 0.0),
        };

        let response = route_event(
            &json!({"httpMethod": "POST", "path": "/menu"}),
            &services,
        );

        assert_eq!(response.status_code, 404);
        let body = response.body_json().expect("error body should be json");
        assert_eq!(body["error"], json!("route_not_found"));
        assert!(services.store.is_empty());
    }
}
