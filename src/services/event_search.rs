use actix_web::http::StatusCode;
use std::sync::Arc;
use url::Url;

use crate::error::ApiError;
use crate::models::event::{EventList, EventResponse};
use crate::services::upstream::{
    endpoint, UpstreamError, UpstreamRequest, UpstreamResponse, UpstreamTransport,
};

pub const DEFAULT_TICKETMASTER_URL: &str = "https://app.ticketmaster.com/discovery/v2";

/// Filters accepted by `GET /events`.
#[derive(Debug, Default, Clone)]
pub struct EventQuery {
    pub city: Option<String>,
}

/// Proxies event searches to the Ticketmaster Discovery API.
#[derive(Clone)]
pub struct EventSearch {
    transport: Arc<dyn UpstreamTransport>,
    base_url: Url,
}

impl EventSearch {
    pub fn new(transport: Arc<dyn UpstreamTransport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    pub async fn search(&self, api_key: &str, query: &EventQuery) -> Result<EventList, ApiError> {
        let request = build_request(&self.base_url, api_key, query)?;
        let response = self.transport.send(request).await?;
        map_response(response)
    }
}

pub fn build_request(
    base_url: &Url,
    api_key: &str,
    query: &EventQuery,
) -> Result<UpstreamRequest, UpstreamError> {
    let mut url = endpoint(base_url, "events")?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("apikey", api_key);
        if let Some(city) = query.city.as_deref().filter(|c| !c.is_empty()) {
            pairs.append_pair("city", city);
        }
    }

    Ok(UpstreamRequest::get(url))
}

/// Decodes the Ticketmaster envelope and returns its `_embedded` payload.
pub fn map_response(response: UpstreamResponse) -> Result<EventList, ApiError> {
    if !response.is_ok() {
        let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
        return Err(ApiError::UpstreamStatus(status));
    }

    let envelope: EventResponse =
        serde_json::from_slice(&response.body).map_err(UpstreamError::from)?;

    Ok(envelope.embedded)
}
