use grill_core::delivery::RESTAURANT_POSITION;
use grill_lambda::handlers::router::GrillServices;
use grill_lambda::test_helpers::{
    newcastle_place, InMemoryRecordStore, StubGeocoder, StubRouteCalculator,
};
use serde_json::{json, Value};

pub type TestServices = GrillServices<InMemoryRecordStore, StubGeocoder, StubRouteCalculator>;

pub fn test_services() -> TestServices {
    GrillServices {
        origin: RESTAURANT_POSITION,
        store: InMemoryRecordStore::new(),
        geocoder: StubGeocoder::returning(vec![newcastle_place()]),
        router: StubRouteCalculator::returning(5.0, "Kilometers", 723.0),
    }
}

pub fn customer_body() -> Value {
    json!({
        "firstName": "Lee",
        "surname": "Gilmore",
        "addressLineOne": "1 Grey Street",
        "addressLineTwo": "Grainger Town",
        "postCode": "NE1 1AA"
    })
}

pub fn create_customer_event(body: &Value) -> Value {
    json!({
        "httpMethod": "POST",
        "resource": "/customers",
        "path": "/customers",
        "pathParameters": null,
        "body": body.to_string(),
    })
}

pub fn create_order_event(customer_id: &str, product_id: &str) -> Value {
    json!({
        "httpMethod": "POST",
        "resource": "/customers/{id}/orders",
        "path": format!("/customers/{customer_id}/orders"),
        "pathParameters": {"id": customer_id},
        "body": json!({"productId": product_id}).to_string(),
    })
}
