// src/domain/cafe.rs

use crate::api::ApiCafe;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use url::Url;

/// A cafe as shown in the viewer, normalized from the raw feed payload.
/// This acts as an anti-corruption layer between the wire format and the
/// pages: records are built once per fetch and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Cafe {
    pub cafe_id: i64,
    pub cafe_name: String,
    pub cafe_address: String,
    pub phone: Option<String>,
    /// Table id -> occupancy flag (0 = free, 1 = occupied). Key order is
    /// not meaningful; display goes through `SeatSummary`.
    pub table_status: Option<HashMap<String, i64>>,
    pub lat: f64,
    pub lng: f64,
    pub place_url: Option<String>,
    pub is_test: Option<bool>,
}

impl PartialEq for Cafe {
    // Identity is the feed id alone.
    fn eq(&self, other: &Self) -> bool {
        self.cafe_id == other.cafe_id
    }
}

impl Eq for Cafe {}

impl Cafe {
    /// Normalizes a decoded feed record. A missing or unparseable
    /// `place_url` falls back to a Google Maps search on the coordinates.
    pub fn from_api(raw: &ApiCafe) -> Self {
        let place_url = match raw.place_url.as_deref().and_then(|s| Url::parse(s).ok()) {
            Some(url) => url.to_string(),
            None => google_maps_url(raw.lat, raw.lng),
        };

        Cafe {
            cafe_id: raw.cafe_id,
            cafe_name: raw.cafe_name.clone(),
            cafe_address: raw.cafe_address.clone(),
            phone: raw.phone.clone(),
            table_status: raw.table_status.clone(),
            lat: raw.lat,
            lng: raw.lng,
            place_url: Some(place_url),
            is_test: raw.is_test,
        }
    }

    /// Synthesized record with random occupancy, for demo runs when the
    /// feed is unreachable or absent.
    pub fn demo(
        cafe_id: i64,
        name: &str,
        address: &str,
        lat: f64,
        lng: f64,
        rng: &mut impl Rng,
    ) -> Self {
        Cafe {
            cafe_id,
            cafe_name: name.to_string(),
            cafe_address: address.to_string(),
            phone: None,
            table_status: Some(demo_table_status(rng)),
            lat,
            lng,
            place_url: Some(google_maps_url(lat, lng)),
            is_test: Some(false),
        }
    }

    pub fn is_test(&self) -> bool {
        self.is_test == Some(true)
    }
}

/// 5 to 10 tables, each with a 50% chance of being occupied. The RNG is
/// passed in so tests can seed it.
pub fn demo_table_status(rng: &mut impl Rng) -> HashMap<String, i64> {
    let tables = rng.gen_range(5..=10);
    let mut status = HashMap::new();
    for i in 1..=tables {
        status.insert(format!("table_{i}"), if rng.gen_bool(0.5) { 1 } else { 0 });
    }
    status
}

fn google_maps_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={lat},{lng}")
}

/// Appends incoming cafes whose id is not already present. First
/// occurrence wins and existing order is preserved.
pub fn merge_unique(mut existing: Vec<Cafe>, incoming: Vec<Cafe>) -> Vec<Cafe> {
    let seen: HashSet<i64> = existing.iter().map(|c| c.cafe_id).collect();
    existing.extend(incoming.into_iter().filter(|c| !seen.contains(&c.cafe_id)));
    existing
}
