use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use entertain_api::{
    config::Config, db, routes, services::itinerary_store::MongoItineraryStore, state::AppState,
};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = Config::from_env().map_err(|e| startup_error("Invalid configuration", e))?;

    let client = db::mongo::create_mongo_client(&config.mongo_uri, config.connect_timeout)
        .await
        .map_err(|e| startup_error("Failed to create MongoDB client", e))?;
    let store = Arc::new(MongoItineraryStore::new(client, config.store_timeout));

    let state = AppState::with_http_transport(&config, store)
        .map_err(|e| startup_error("Failed to build upstream client", e))?;
    let state = web::Data::new(state);

    log::info!("Starting HTTP server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
