use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client, Collection,
};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::db::mongo::{DATABASE, ITINERARY_COLLECTION};
use crate::models::itinerary::Itinerary;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store backend unavailable: {0}")]
    Backend(String),

    #[error("store operation exceeded {0:?}")]
    Timeout(Duration),
}

/// Persistence for itineraries. Records are only ever created and listed.
#[async_trait]
pub trait ItineraryStore: Send + Sync {
    /// Inserts one document. No deduplication is performed.
    async fn create(&self, itinerary: &Itinerary) -> Result<(), StoreError>;

    /// Every stored itinerary, ascending by the raw `startDate` string.
    async fn list_by_start_date(&self) -> Result<Vec<Itinerary>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Sort document for listing. `startDate` is a string, so Mongo orders it
/// lexicographically: "12-1-2022" comes before "3-1-2022".
pub fn start_date_sort() -> Document {
    doc! { "startDate": 1 }
}

pub struct MongoItineraryStore {
    client: Arc<Client>,
    database: String,
    collection: Collection<Itinerary>,
    timeout: Duration,
}

impl MongoItineraryStore {
    pub fn new(client: Arc<Client>, timeout: Duration) -> Self {
        Self::with_namespace(client, DATABASE, ITINERARY_COLLECTION, timeout)
    }

    pub fn with_namespace(
        client: Arc<Client>,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Self {
        let collection = client.database(database).collection::<Itinerary>(collection);

        Self {
            client,
            database: database.to_string(),
            collection,
            timeout,
        }
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl ItineraryStore for MongoItineraryStore {
    async fn create(&self, itinerary: &Itinerary) -> Result<(), StoreError> {
        let result = self.bounded(self.collection.insert_one(itinerary)).await?;
        log::info!("Inserted itinerary {}", result.inserted_id);
        Ok(())
    }

    async fn list_by_start_date(&self) -> Result<Vec<Itinerary>, StoreError> {
        let itineraries = self
            .bounded(async {
                let cursor = self
                    .collection
                    .find(doc! {})
                    .sort(start_date_sort())
                    .await?;
                cursor.try_collect::<Vec<Itinerary>>().await
            })
            .await?;

        log::info!("Retrieved {} itineraries", itineraries.len());
        Ok(itineraries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(
            self.client
                .database(&self.database)
                .run_command(doc! { "ping": 1 }),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_ascending_on_start_date() {
        let sort = start_date_sort();
        assert_eq!(sort.len(), 1);
        assert_eq!(sort.get_i32("startDate").unwrap(), 1);
    }

    // Nothing answers at this address, so only the store deadline can end the call
    async fn unreachable_store(timeout: Duration) -> MongoItineraryStore {
        let client = Client::with_uri_str(
            "mongodb://10.255.255.1:27017/?serverSelectionTimeoutMS=10000&connectTimeoutMS=10000",
        )
        .await
        .unwrap();
        MongoItineraryStore::new(Arc::new(client), timeout)
    }

    #[actix_rt::test]
    async fn test_create_gives_up_at_deadline() {
        let store = unreachable_store(Duration::from_millis(300)).await;
        let started = std::time::Instant::now();

        let result = store.create(&Itinerary::default()).await;

        assert!(matches!(result, Err(StoreError::Timeout(d)) if d == Duration::from_millis(300)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[actix_rt::test]
    async fn test_list_and_ping_give_up_at_deadline() {
        let store = unreachable_store(Duration::from_millis(300)).await;

        assert!(matches!(
            store.list_by_start_date().await,
            Err(StoreError::Timeout(_))
        ));
        assert!(matches!(store.ping().await, Err(StoreError::Timeout(_))));
    }
}
