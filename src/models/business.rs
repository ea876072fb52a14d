use serde::{Deserialize, Serialize};

/// Yelp business search result, passed through to callers as decoded.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct BusinessSearchResult {
    #[serde(default)]
    pub businesses: Vec<Business>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Business {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub review_count: i64,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub distance: f64,
}
