use grill_core::contract::PlaceMatch;

pub trait Geocoder: Send + Sync {
    fn search_text(&self, text: &str) -> Result<Vec<PlaceMatch>, String>;
}
