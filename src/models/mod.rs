pub mod business;
pub mod event;
pub mod itinerary;
