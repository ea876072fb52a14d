use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::itinerary::Itinerary;
use crate::state::AppState;

/*
    PUT /itinerary
*/
pub async fn create(
    state: web::Data<AppState>,
    input: web::Json<Itinerary>,
) -> Result<HttpResponse, ApiError> {
    let mut itinerary = input.into_inner();
    // Identical resubmissions are stored as new documents
    itinerary.id = None;

    state.itineraries.create(&itinerary).await?;
    Ok(HttpResponse::Created().finish())
}

/*
    GET /itinerary
*/
pub async fn get_all(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let itineraries = state.itineraries.list_by_start_date().await?;
    Ok(HttpResponse::Ok().json(itineraries))
}
