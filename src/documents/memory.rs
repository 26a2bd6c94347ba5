//! In-Memory Collection Module
//!
//! Vec-backed collection for tests and local runs.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use crate::documents::{DocumentCollection, DocumentStream};
use crate::error::Result;

/// In-process collection keeping documents in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns true if no document has been inserted.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn find_all(&self) -> Result<DocumentStream> {
        // Snapshot, so the stream does not hold the lock
        let snapshot = self.documents.read().await.clone();
        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn insert_one(&self, mut document: Document) -> Result<Bson> {
        let id = match document.get("_id").cloned() {
            Some(id) => id,
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };
        self.documents.write().await.push(document);
        Ok(id)
    }

    async fn find_by_id(&self, id: &Bson) -> Result<Option<Document>> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .find(|document| document.get("_id") == Some(id))
            .cloned())
    }
}
