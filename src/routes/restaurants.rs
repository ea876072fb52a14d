use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::ApiError;
use crate::middleware::api_key::ApiKey;
use crate::routes::first_values;
use crate::services::business_search::BusinessQuery;
use crate::state::AppState;

/*
    GET /restaurants?longitude=&latitude=&radius=&limit=
*/
pub async fn get_restaurants(
    state: web::Data<AppState>,
    api_key: ApiKey,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let mut params = first_values(req.query_string());
    let query = BusinessQuery {
        longitude: params.remove("longitude"),
        latitude: params.remove("latitude"),
        radius: params.remove("radius"),
        limit: params.remove("limit"),
    };

    let restaurants = state.businesses.search(api_key.as_str(), &query).await?;
    Ok(HttpResponse::Ok().json(restaurants))
}
