use std::future::{ready, Ready};

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};

use crate::error::ApiError;
use crate::middleware::api_key::ApiKey;

// Only populated on routes wrapped in `ApiKeyGate`
impl FromRequest for ApiKey {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<ApiKey>() {
            Some(key) => ready(Ok(key.clone())),
            None => ready(Err(ApiError::Unauthorized.into())),
        }
    }
}
