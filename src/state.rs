use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    business_search::BusinessSearch,
    event_search::EventSearch,
    itinerary_store::ItineraryStore,
    upstream::{HttpTransport, UpstreamError, UpstreamTransport},
};

/// Long-lived handles shared by every worker, built once at startup.
pub struct AppState {
    pub events: EventSearch,
    pub businesses: BusinessSearch,
    pub itineraries: Arc<dyn ItineraryStore>,
}

impl AppState {
    pub fn new(
        config: &Config,
        transport: Arc<dyn UpstreamTransport>,
        itineraries: Arc<dyn ItineraryStore>,
    ) -> Self {
        Self {
            events: EventSearch::new(transport.clone(), config.ticketmaster_url.clone()),
            businesses: BusinessSearch::new(transport, config.yelp_url.clone()),
            itineraries,
        }
    }

    /// State wired to the real upstream providers.
    pub fn with_http_transport(
        config: &Config,
        itineraries: Arc<dyn ItineraryStore>,
    ) -> Result<Self, UpstreamError> {
        let transport = Arc::new(HttpTransport::new(config.upstream_timeout)?);
        Ok(Self::new(config, transport, itineraries))
    }
}
