mod support;

use grill_core::contract::{Customer, Order};
use grill_core::records::decode_record;
use grill_lambda::adapters::record_store::RecordStore;
use grill_lambda::handlers::router::route_event;
use serde_json::json;

use support::{create_customer_event, create_order_event, customer_body, test_services};

#[test]
fn register_then_order_through_router() {
    let services = test_services();

    let created = route_event(&create_customer_event(&customer_body()), &services);
    assert_eq!(created.status_code, 201);
    let customer: Customer =
        serde_json::from_str(&created.body).expect("customer body should parse");
    assert_eq!(customer.longitude, -1.6);
    assert_eq!(customer.latitude, 54.9);
    assert_eq!(customer.region.as_deref(), Some("Tyne and Wear"));
    assert_eq!(customer.country.as_deref(), Some("GB"));

    let placed = route_event(&create_order_event(&customer.id, "stottie-burger"), &services);
    assert_eq!(placed.status_code, 201);
    let order: Order = serde_json::from_str(&placed.body).expect("order body should parse");
    assert_eq!(order.customer_id, customer.id);
    assert_eq!(order.distance, 5.0);
    assert_eq!(order.distance_unit, "Kilometers");
    assert_eq!(order.duration_in_minutes, 12);

    assert_eq!(
        services.router.requests(),
        vec![(services.origin, customer.position())]
    );
}

#[test]
fn created_records_read_back_identical() {
    let services = test_services();

    let created = route_event(&create_customer_event(&customer_body()), &services);
    let customer: Customer =
        serde_json::from_str(&created.body).expect("customer body should parse");
    let placed = route_event(&create_order_event(&customer.id, "chips"), &services);
    let order: Order = serde_json::from_str(&placed.body).expect("order body should parse");

    let stored_customer = services
        .store
        .get_item(&customer.id)
        .expect("read should succeed")
        .expect("customer should exist");
    let stored_order = services
        .store
        .get_item(&order.id)
        .expect("read should succeed")
        .expect("order should exist");

    assert_eq!(decode_record::<Customer>(stored_customer), Ok(customer));
    assert_eq!(decode_record::<Order>(stored_order), Ok(order));
    assert_eq!(services.store.len(), 2);
}

#[test]
fn order_for_unknown_customer_is_not_found_for_any_product() {
    let services = test_services();

    for product_id in ["stottie-burger", "chips", "pease-pudding"] {
        let response = route_event(&create_order_event("no-such-customer", product_id), &services);
        assert_eq!(response.status_code, 404);
        let body = response.body_json().expect("error body should be json");
        assert_eq!(body["error"], json!("not_found"));
        assert_eq!(body["message"], json!("customer not found"));
    }

    assert!(services.store.is_empty());
    assert!(services.router.requests().is_empty());
}

#[test]
fn order_route_resolved_from_raw_path_without_path_parameters() {
    let services = test_services();
    let created = route_event(&create_customer_event(&customer_body()), &services);
    let customer: Customer =
        serde_json::from_str(&created.body).expect("customer body should parse");

    let event = json!({
        "httpMethod": "POST",
        "path": format!("/customers/{}/orders", customer.id),
        "body": "{\"productId\":\"chips\"}",
    });
    let response = route_event(&event, &services);

    assert_eq!(response.status_code, 201);
}

#[test]
fn missing_customer_body_writes_nothing() {
    let services = test_services();
    let mut event = create_customer_event(&customer_body());
    event["body"] = json!(null);

    let response = route_event(&event, &services);

    assert_eq!(response.status_code, 400);
    assert!(services.store.is_empty());
    assert!(services.geocoder.queries().is_empty());
}

#[test]
fn unknown_route_answers_route_not_found() {
    let services = test_services();
    let response = route_event(
        &json!({"httpMethod": "DELETE", "resource": "/customers/{id}"}),
        &services,
    );

    assert_eq!(response.status_code, 404);
    let body = response.body_json().expect("error body should be json");
    assert_eq!(body["error"], json!("route_not_found"));
}
