//! Amazon Location Service adapters: place index search and route calculation.

use aws_sdk_location::types::{CalculateRouteSummary, Place, SearchForTextResult};
use grill_core::contract::{PlaceMatch, Position, RouteSummary};

use crate::adapters::block_on;
use crate::adapters::geocoder::Geocoder;
use crate::adapters::route_calculator::RouteCalculator;

pub struct LocationPlaceIndex {
    index_name: String,
    client: aws_sdk_location::Client,
}

impl LocationPlaceIndex {
    pub fn new(index_name: impl Into<String>, client: aws_sdk_location::Client) -> Self {
        Self {
            index_name: index_name.into(),
            client,
        }
    }
}

impl Geocoder for LocationPlaceIndex {
    fn search_text(&self, text: &str) -> Result<Vec<PlaceMatch>, String> {
        let client = self.client.clone();
        let index_name = self.index_name.clone();
        let text = text.to_string();

        let output = block_on(async move {
            client
                .search_place_index_for_text()
                .index_name(index_name)
                .text(text)
                .send()
                .await
                .map_err(|error| format!("failed to search place index: {error}"))
        })?;

        Ok(place_matches(output.results()))
    }
}

fn place_matches(results: &[SearchForTextResult]) -> Vec<PlaceMatch> {
    results
        .iter()
        .map(|result| result.place().map(place_match).unwrap_or_default())
        .collect()
}

fn place_match(place: &Place) -> PlaceMatch {
    PlaceMatch {
        point: place
            .geometry()
            .and_then(|geometry| Position::from_lon_lat(geometry.point())),
        region: place.region().map(str::to_string),
        country: place.country().map(str::to_string),
    }
}

pub struct LocationRouteCalculator {
    calculator_name: String,
    client: aws_sdk_location::Client,
}

impl LocationRouteCalculator {
    pub fn new(calculator_name: impl Into<String>, client: aws_sdk_location::Client) -> Self {
        Self {
            calculator_name: calculator_name.into(),
            client,
        }
    }
}

impl RouteCalculator for LocationRouteCalculator {
    fn calculate_route(
        &self,
        departure: Position,
        destination: Position,
    ) -> Result<RouteSummary, String> {
        let client = self.client.clone();
        let calculator_name = self.calculator_name.clone();

        let output = block_on(async move {
            client
                .calculate_route()
                .calculator_name(calculator_name)
                .set_departure_position(Some(departure.to_lon_lat()))
                .set_destination_position(Some(destination.to_lon_lat()))
                .send()
                .await
                .map_err(|error| format!("failed to calculate route: {error}"))
        })?;

        route_summary(output.summary())
    }
}

fn route_summary(summary: Option<&CalculateRouteSummary>) -> Result<RouteSummary, String> {
    let summary = summary.ok_or_else(|| "route calculation returned no summary".to_string())?;
    Ok(RouteSummary {
        distance: summary.distance(),
        distance_unit: summary.distance_unit().as_str().to_string(),
        duration_seconds: summary.duration_seconds(),
    })
}
