use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

pub const DATABASE: &str = "entertainment";
pub const ITINERARY_COLLECTION: &str = "itineraries";

/// Builds the process-wide client. The driver pools connections internally,
/// so one shared handle serves every request.
pub async fn create_mongo_client(
    uri: &str,
    connect_timeout: Duration,
) -> Result<Arc<Client>, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    client_options.connect_timeout = Some(connect_timeout);
    client_options.server_selection_timeout = Some(connect_timeout);
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    // A failed ping is not fatal; the health endpoint keeps reporting it
    match client.database(DATABASE).run_command(doc! {"ping": 1}).await {
        Ok(_) => log::info!("Connected to MongoDB"),
        Err(e) => log::warn!("Connected to MongoDB but ping failed: {}", e),
    }

    match client.list_database_names().await {
        Ok(names) => log::debug!("Visible databases: {:?}", names),
        Err(e) => log::debug!("Could not list databases: {}", e),
    }

    Ok(Arc::new(client))
}
