use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::ApiError;
use crate::middleware::api_key::ApiKey;
use crate::routes::first_values;
use crate::services::event_search::EventQuery;
use crate::state::AppState;

/*
    GET /events?city=
*/
pub async fn get_events(
    state: web::Data<AppState>,
    api_key: ApiKey,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let mut params = first_values(req.query_string());
    let query = EventQuery {
        city: params.remove("city"),
    };

    let events = state.events.search(api_key.as_str(), &query).await?;
    Ok(HttpResponse::Ok().json(events))
}
