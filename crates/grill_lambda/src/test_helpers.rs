//! In-process collaborators for exercising the handlers without AWS.

use std::collections::HashMap;
use std::sync::Mutex;

use grill_core::contract::{Customer, PlaceMatch, Position, RouteSummary};
use grill_core::records::{encode_record, record_id, RecordItem};

use crate::adapters::geocoder::Geocoder;
use crate::adapters::record_store::RecordStore;
use crate::adapters::route_calculator::RouteCalculator;

#[derive(Default)]
pub struct InMemoryRecordStore {
    items: Mutex<HashMap<String, RecordItem>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("poisoned mutex").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for InMemoryRecordStore {
    fn put_item(&self, item: &RecordItem) -> Result<(), String> {
        let id = record_id(item)
            .ok_or_else(|| "record is missing string key 'id'".to_string())?
            .to_string();
        self.items
            .lock()
            .expect("poisoned mutex")
            .insert(id, item.clone());
        Ok(())
    }

    fn get_item(&self, id: &str) -> Result<Option<RecordItem>, String> {
        Ok(self.items.lock().expect("poisoned mutex").get(id).cloned())
    }
}

/// Rejects every read and write.
pub struct FailingRecordStore;

impl RecordStore for FailingRecordStore {
    fn put_item(&self, _item: &RecordItem) -> Result<(), String> {
        Err("ProvisionedThroughputExceededException".to_string())
    }

    fn get_item(&self, _id: &str) -> Result<Option<RecordItem>, String> {
        Err("ProvisionedThroughputExceededException".to_string())
    }
}

pub struct StubGeocoder {
    outcome: Result<Vec<PlaceMatch>, String>,
    queries: Mutex<Vec<String>>,
}

impl StubGeocoder {
    pub fn returning(results: Vec<PlaceMatch>) -> Self {
        Self {
            outcome: Ok(results),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("poisoned mutex").clone()
    }
}

impl Geocoder for StubGeocoder {
    fn search_text(&self, text: &str) -> Result<Vec<PlaceMatch>, String> {
        self.queries
            .lock()
            .expect("poisoned mutex")
            .push(text.to_string());
        self.outcome.clone()
    }
}

pub struct StubRouteCalculator {
    outcome: Result<RouteSummary, String>,
    requests: Mutex<Vec<(Position, Position)>>,
}

impl StubRouteCalculator {
    pub fn returning(distance: f64, distance_unit: &str, duration_seconds: f64) -> Self {
        Self {
            outcome: Ok(RouteSummary {
                distance,
                distance_unit: distance_unit.to_string(),
                duration_seconds,
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(Position, Position)> {
        self.requests.lock().expect("poisoned mutex").clone()
    }
}

impl RouteCalculator for StubRouteCalculator {
    fn calculate_route(
        &self,
        departure: Position,
        destination: Position,
    ) -> Result<RouteSummary, String> {
        self.requests
            .lock()
            .expect("poisoned mutex")
            .push((departure, destination));
        self.outcome.clone()
    }
}

/// The geocode result for NE1 1AA.
pub fn newcastle_place() -> PlaceMatch {
    PlaceMatch {
        point: Some(Position::new(-1.6, 54.9)),
        region: Some("Tyne and Wear".to_string()),
        country: Some("GB".to_string()),
    }
}

/// Writes a customer at a known coordinate straight into `store`.
///
/// # Panics
///
/// Panics if the store rejects the write.
pub fn seeded_customer(store: &impl RecordStore) -> Customer {
    let customer = Customer {
        id: "cust-seeded".to_string(),
        first_name: "Lee".to_string(),
        surname: "Gilmore".to_string(),
        address_line_one: "1 Grey Street".to_string(),
        address_line_two: None,
        address_line_three: None,
        address_line_four: None,
        post_code: "NE1 1AA".to_string(),
        longitude: -1.6,
        latitude: 54.9,
        region: Some("Tyne and Wear".to_string()),
        country: Some("GB".to_string()),
    };
    let item = encode_record(&customer).expect("customer should encode");
    store.put_item(&item).expect("seeded customer should be stored");
    customer
}
