//! Document Collection Module
//!
//! Helpers over a document-store collection: list every document, insert
//! one built from named fields.

mod memory;
mod mongo;

use async_trait::async_trait;
use futures::stream::BoxStream;
use mongodb::bson::{Bson, Document};

use crate::error::Result;

// Re-export public types
pub use memory::MemoryCollection;
pub use mongo::connect_collection;

/// Lazy stream of documents read from a collection.
pub type DocumentStream = BoxStream<'static, Result<Document>>;

// == Collection Trait ==
/// The operations the helpers need from a collection.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Streams every document in the collection.
    async fn find_all(&self) -> Result<DocumentStream>;

    /// Inserts `document` and returns its `_id`.
    async fn insert_one(&self, document: Document) -> Result<Bson>;

    /// Looks up the document whose `_id` equals `id`.
    async fn find_by_id(&self, id: &Bson) -> Result<Option<Document>>;
}

// == List All ==
/// Returns a lazy stream over every document in `collection`.
///
/// An empty collection yields an empty stream.
pub async fn list_all<C>(collection: &C) -> Result<DocumentStream>
where
    C: DocumentCollection + ?Sized,
{
    collection.find_all().await
}

// == Insert School ==
/// Inserts a document built from `fields` and returns the new `_id`.
///
/// `fields` is any sequence of name/value pairs; a `doc!` works directly.
///
/// # Example
/// ```ignore
/// let id = insert_school(&collection, doc! { "name": "UCSF", "address": "505 Parnassus Ave" }).await?;
/// ```
pub async fn insert_school<C, I, K, V>(collection: &C, fields: I) -> Result<Bson>
where
    C: DocumentCollection + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Bson>,
{
    let document: Document = fields
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect();
    collection.insert_one(document).await
}
