pub mod business_search;
pub mod event_search;
pub mod itinerary_store;
pub mod upstream;
