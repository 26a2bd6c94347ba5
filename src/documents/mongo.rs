//! MongoDB Collection Module
//!
//! Implements the collection operations on top of the MongoDB driver.

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::config::Config;
use crate::documents::{DocumentCollection, DocumentStream};
use crate::error::{Error, Result};

/// Opens a client from `config` and returns the configured collection.
pub async fn connect_collection(config: &Config) -> Result<Collection<Document>> {
    info!(
        "Connecting to MongoDB, collection {}.{}",
        config.mongo_database, config.mongo_collection
    );
    let client = Client::with_uri_str(&config.mongo_uri).await?;
    Ok(client
        .database(&config.mongo_database)
        .collection::<Document>(&config.mongo_collection))
}

#[async_trait]
impl DocumentCollection for Collection<Document> {
    async fn find_all(&self) -> Result<DocumentStream> {
        let cursor = self.find(None, None).await?;
        debug!(collection = self.name(), "find all");
        Ok(cursor.map_err(Error::from).boxed())
    }

    async fn insert_one(&self, document: Document) -> Result<Bson> {
        let result = Collection::insert_one(self, document, None).await?;
        debug!(collection = self.name(), id = %result.inserted_id, "document inserted");
        Ok(result.inserted_id)
    }

    async fn find_by_id(&self, id: &Bson) -> Result<Option<Document>> {
        let found = self.find_one(doc! { "_id": id.clone() }, None).await?;
        Ok(found)
    }
}
