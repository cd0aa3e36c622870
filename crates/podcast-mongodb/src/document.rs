//! Document trait for MongoDB records
//!
//! This module provides the `Document` trait implemented by every record
//! type. It supplies generic CRUD over an untyped BSON collection, with
//! serde doing the conversion in both directions.

use async_trait::async_trait;
use bson::{doc, Document as BsonDocument};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use podcast_common::{PodcastError, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::id::RecordId;

/// Core trait for MongoDB documents
///
/// # Example
///
/// ```ignore
/// use serde::{Deserialize, Serialize};
/// use podcast_mongodb::{Document, RecordId};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Listener {
///     #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
///     id: Option<RecordId>,
///     name: String,
/// }
///
/// impl Document for Listener {
///     fn collection_name() -> &'static str {
///         "listeners"
///     }
/// }
/// ```
#[async_trait]
pub trait Document: Serialize + DeserializeOwned + Send + Sync + Sized {
    /// Get the collection name for this document type
    fn collection_name() -> &'static str;

    /// Set the document's identifier
    fn set_id(&mut self, _id: RecordId) {}

    /// Convert document to BSON
    fn to_bson(&self) -> Result<BsonDocument> {
        bson::to_document(self).map_err(|e| PodcastError::Serialization(e.to_string()))
    }

    /// Create document from BSON
    fn from_bson(doc: BsonDocument) -> Result<Self> {
        bson::from_document(doc).map_err(|e| PodcastError::Deserialization(e.to_string()))
    }

    fn collection(db: &Database) -> Collection<BsonDocument> {
        db.collection(Self::collection_name())
    }

    /// Insert this document and record the generated identifier on it
    async fn insert_one(&mut self, db: &Database) -> Result<RecordId> {
        let collection = Self::collection(db);
        let bson_doc = self.to_bson()?;

        let result = collection.insert_one(bson_doc).await?;

        let id = RecordId::from_bson(&result.inserted_id)
            .ok_or_else(|| PodcastError::Database("Invalid inserted ID".to_string()))?;

        self.set_id(id);

        Ok(id)
    }

    /// Insert a batch of documents in one round trip
    ///
    /// Returns the generated identifiers in input order.
    async fn insert_many(docs: &mut [Self], db: &Database) -> Result<Vec<RecordId>> {
        if docs.is_empty() {
            return Ok(Vec::new());
        }

        let collection = Self::collection(db);
        let bson_docs = docs
            .iter()
            .map(Self::to_bson)
            .collect::<Result<Vec<_>>>()?;

        let result = collection.insert_many(bson_docs).await?;

        let mut ids = Vec::with_capacity(docs.len());
        for (index, doc) in docs.iter_mut().enumerate() {
            let id = result
                .inserted_ids
                .get(&index)
                .and_then(RecordId::from_bson)
                .ok_or_else(|| {
                    PodcastError::Database(format!("Missing inserted ID at index {}", index))
                })?;
            doc.set_id(id);
            ids.push(id);
        }

        Ok(ids)
    }

    /// Find a single document matching the filter
    async fn find_one(db: &Database, filter: BsonDocument) -> Result<Option<Self>> {
        let collection = Self::collection(db);

        match collection.find_one(filter).await? {
            Some(doc) => Ok(Some(Self::from_bson(doc)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(db: &Database, id: RecordId) -> Result<Option<Self>> {
        Self::find_one(db, doc! { "_id": id }).await
    }

    /// Find all documents matching the filter, in the server's natural order
    async fn find(db: &Database, filter: BsonDocument) -> Result<Vec<Self>> {
        let collection = Self::collection(db);

        let cursor = collection.find(filter).await?;
        let docs: Vec<BsonDocument> = cursor.try_collect().await?;

        docs.into_iter().map(Self::from_bson).collect()
    }

    /// `$set` the given fields on the first document matching the filter
    ///
    /// Returns the number of documents modified.
    async fn update_one(db: &Database, filter: BsonDocument, update: BsonDocument) -> Result<u64> {
        let collection = Self::collection(db);

        let result = collection
            .update_one(filter, doc! { "$set": update })
            .await?;

        Ok(result.modified_count)
    }

    /// Delete the first document matching the filter
    ///
    /// Returns the number of documents deleted.
    async fn delete_one(db: &Database, filter: BsonDocument) -> Result<u64> {
        let collection = Self::collection(db);

        let result = collection.delete_one(filter).await?;

        Ok(result.deleted_count)
    }
}
