use serde::Deserialize;
use std::collections::HashMap;

// cafe
//  ├── cafe_id
//  ├── cafe_name
//  ├── cafe_address
//  ├── phone           (optional)
//  ├── table_status    (optional, table id -> 0 free / 1 occupied)
//  ├── lat / lng
//  ├── place_url       (optional)
//  └── is_test         (optional)

/// One cafe record exactly as the feed serves it.
#[derive(Debug, Deserialize)]
pub struct ApiCafe {
    #[serde(rename = "cafe_id")]
    pub cafe_id: i64,
    #[serde(rename = "cafe_name")]
    pub cafe_name: String,
    #[serde(rename = "cafe_address")]
    pub cafe_address: String,
    pub phone: Option<String>,
    #[serde(rename = "table_status")]
    pub table_status: Option<HashMap<String, i64>>,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "place_url")]
    pub place_url: Option<String>,
    #[serde(rename = "is_test")]
    pub is_test: Option<bool>,
}
