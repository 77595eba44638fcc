use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GrillError;

pub const CREATE_CUSTOMER_METHOD: &str = "create-customer.handler";
pub const CREATE_ORDER_METHOD: &str = "create-order.handler";

/// A geographic coordinate. Location services exchange it as
/// `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

impl Position {
    pub const ZERO: Position = Position {
        longitude: 0.0,
        latitude: 0.0,
    };

    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn to_lon_lat(self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }

    /// Reads a `[longitude, latitude, ..]` point. Returns `None` when fewer
    /// than two components are present.
    pub fn from_lon_lat(point: &[f64]) -> Option<Self> {
        match point {
            [longitude, latitude, ..] => Some(Self::new(*longitude, *latitude)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerInput {
    pub first_name: String,
    pub surname: String,
    pub address_line_one: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_three: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_four: Option<String>,
    pub post_code: String,
}

impl CreateCustomerInput {
    pub fn validate(&self) -> Result<(), GrillError> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("surname", &self.surname),
            ("addressLineOne", &self.address_line_one),
            ("postCode", &self.post_code),
        ] {
            if value.trim().is_empty() {
                return Err(GrillError::validation(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub surname: String,
    pub address_line_one: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_three: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_four: Option<String>,
    pub post_code: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Customer {
    pub fn from_input(id: String, input: CreateCustomerInput, place: &GeocodedPlace) -> Self {
        Self {
            id,
            first_name: input.first_name,
            surname: input.surname,
            address_line_one: input.address_line_one,
            address_line_two: input.address_line_two,
            address_line_three: input.address_line_three,
            address_line_four: input.address_line_four,
            post_code: input.post_code,
            longitude: place.position.longitude,
            latitude: place.position.latitude,
            region: place.region.clone(),
            country: place.country.clone(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.longitude, self.latitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub product_id: String,
}

impl CreateOrderInput {
    pub fn validate(&self) -> Result<(), GrillError> {
        if self.product_id.trim().is_empty() {
            return Err(GrillError::validation("productId cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub product_id: String,
    pub distance: f64,
    pub distance_unit: String,
    pub duration_in_minutes: u64,
}

/// One result of a free-text place search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceMatch {
    pub point: Option<Position>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// The parts of a place match a customer record keeps.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub position: Position,
    pub region: Option<String>,
    pub country: Option<String>,
    /// True when the match carried no point and `position` is the zero
    /// coordinate.
    pub defaulted_position: bool,
}

impl From<PlaceMatch> for GeocodedPlace {
    fn from(place: PlaceMatch) -> Self {
        Self {
            position: place.point.unwrap_or(Position::ZERO),
            region: place.region,
            country: place.country,
            defaulted_position: place.point.is_none(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub distance: f64,
    pub distance_unit: String,
    pub duration_seconds: f64,
}

/// Per-invocation context carried through every log line of a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub correlation_id: String,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::with_correlation_id(new_record_id())
    }

    pub fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
