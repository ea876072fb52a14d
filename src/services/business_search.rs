use actix_web::http::StatusCode;
use std::sync::Arc;
use url::Url;

use crate::error::ApiError;
use crate::models::business::BusinessSearchResult;
use crate::services::upstream::{
    endpoint, UpstreamError, UpstreamRequest, UpstreamResponse, UpstreamTransport,
};

pub const DEFAULT_YELP_URL: &str = "https://api.yelp.com/v3";

const SEARCH_TERM: &str = "restaurants";

/// Filters accepted by `GET /restaurants`. All optional and forwarded as-is.
#[derive(Debug, Default, Clone)]
pub struct BusinessQuery {
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub radius: Option<String>,
    pub limit: Option<String>,
}

/// Proxies restaurant searches to the Yelp Fusion business search API.
#[derive(Clone)]
pub struct BusinessSearch {
    transport: Arc<dyn UpstreamTransport>,
    base_url: Url,
}

impl BusinessSearch {
    pub fn new(transport: Arc<dyn UpstreamTransport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    pub async fn search(
        &self,
        api_key: &str,
        query: &BusinessQuery,
    ) -> Result<BusinessSearchResult, ApiError> {
        let request = build_request(&self.base_url, api_key, query)?;
        let response = self.transport.send(request).await?;
        map_response(response)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// With a limit, Yelp is asked for the top `limit` results by rating.
pub fn build_request(
    base_url: &Url,
    api_key: &str,
    query: &BusinessQuery,
) -> Result<UpstreamRequest, UpstreamError> {
    let mut url = endpoint(base_url, "businesses/search")?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("term", SEARCH_TERM);
        for (name, value) in [
            ("longitude", &query.longitude),
            ("latitude", &query.latitude),
            ("radius", &query.radius),
        ] {
            if let Some(value) = present(value) {
                pairs.append_pair(name, value);
            }
        }
        if let Some(limit) = present(&query.limit) {
            pairs.append_pair("sort_by", "rating");
            pairs.append_pair("limit", limit);
        }
    }

    Ok(UpstreamRequest::get(url).with_bearer(api_key))
}

pub fn map_response(response: UpstreamResponse) -> Result<BusinessSearchResult, ApiError> {
    if !response.is_ok() {
        let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
        return Err(ApiError::UpstreamStatus(status));
    }

    Ok(serde_json::from_slice(&response.body).map_err(UpstreamError::from)?)
}
