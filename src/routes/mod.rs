use actix_web::web;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::middleware::api_key::ApiKeyGate;

pub mod events;
pub mod health;
pub mod itinerary;
pub mod restaurants;

/// Body decode failures share the JSON error shape of every other failure.
/// Bodies are decoded whatever their Content-Type.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::BadInput(err.to_string()).into())
}

/// Decoded query parameters, keeping the first value of a repeated key.
pub fn first_values(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/events")
                .wrap(ApiKeyGate)
                .route(web::get().to(events::get_events)),
        )
        .service(
            web::resource("/restaurants")
                .wrap(ApiKeyGate)
                .route(web::get().to(restaurants::get_restaurants)),
        )
        .service(
            web::resource("/itinerary")
                .route(web::put().to(itinerary::create))
                .route(web::get().to(itinerary::get_all)),
        );
}
