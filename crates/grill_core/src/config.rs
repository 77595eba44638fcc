use thiserror::Error;

use crate::contract::Position;
use crate::delivery::RESTAURANT_POSITION;

pub const DEFAULT_TABLE_NAME: &str = "development";
pub const DEFAULT_PLACE_INDEX: &str = "index";
pub const DEFAULT_ROUTE_CALCULATOR: &str = "calc";

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
pub const PLACE_INDEX_ENV: &str = "PLACE_INDEX_NAME";
pub const ROUTE_CALCULATOR_ENV: &str = "ROUTE_CALCULATOR";
pub const ORIGIN_LONGITUDE_ENV: &str = "RESTAURANT_LONGITUDE";
pub const ORIGIN_LATITUDE_ENV: &str = "RESTAURANT_LATITUDE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime configuration, read once at cold start.
#[derive(Debug, Clone, PartialEq)]
pub struct GrillConfig {
    pub table_name: String,
    pub place_index: String,
    pub route_calculator: String,
    /// Where deliveries depart from.
    pub origin: Position,
}

impl Default for GrillConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            place_index: DEFAULT_PLACE_INDEX.to_string(),
            route_calculator: DEFAULT_ROUTE_CALCULATOR.to_string(),
            origin: RESTAURANT_POSITION,
        }
    }
}

impl GrillConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Blank
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let longitude = match read(ORIGIN_LONGITUDE_ENV) {
            Some(value) => parse_coordinate(ORIGIN_LONGITUDE_ENV, &value)?,
            None => defaults.origin.longitude,
        };
        let latitude = match read(ORIGIN_LATITUDE_ENV) {
            Some(value) => parse_coordinate(ORIGIN_LATITUDE_ENV, &value)?,
            None => defaults.origin.latitude,
        };

        Ok(Self {
            table_name: read(TABLE_NAME_ENV).unwrap_or(defaults.table_name),
            place_index: read(PLACE_INDEX_ENV).unwrap_or(defaults.place_index),
            route_calculator: read(ROUTE_CALCULATOR_ENV).unwrap_or(defaults.route_calculator),
            origin: Position::new(longitude, latitude),
        })
    }
}

fn parse_coordinate(name: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}
