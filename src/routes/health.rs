use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    services: HashMap<&'static str, ServiceStatus>,
    version: &'static str,
    checked_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mongodb = check_mongodb(&state).await;
    let status = if mongodb.status == "ok" { "ok" } else { "degraded" };

    let mut services = HashMap::new();
    services.insert("mongodb", mongodb);

    HttpResponse::Ok().json(HealthStatus {
        status,
        services,
        version: env!("CARGO_PKG_VERSION"),
        checked_at: Utc::now(),
    })
}

async fn check_mongodb(state: &AppState) -> ServiceStatus {
    match state.itineraries.ping().await {
        Ok(()) => ServiceStatus {
            status: "ok",
            details: None,
        },
        Err(e) => {
            log::warn!("MongoDB health check failed: {}", e);
            ServiceStatus {
                status: "error",
                details: Some("Failed to reach MongoDB".to_string()),
            }
        }
    }
}
