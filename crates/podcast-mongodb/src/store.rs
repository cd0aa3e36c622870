//! Store abstraction used by the CRUD sequence

use async_trait::async_trait;
use bson::doc;
use mongodb::Database;
use podcast_common::Result;
use tracing::{debug, instrument};

use crate::connection::Connection;
use crate::document::Document;
use crate::id::RecordId;
use crate::models::{Episode, Podcast};
use crate::query::EpisodeQuery;

/// Operations on the podcast and episode collections
#[async_trait]
pub trait PodcastStore: Send + Sync {
    /// Insert one podcast and return its generated identifier
    async fn insert_podcast(&self, podcast: &Podcast) -> Result<RecordId>;

    /// Insert episodes in one batch, returning identifiers in input order
    async fn insert_episodes(&self, episodes: &[Episode]) -> Result<Vec<RecordId>>;

    async fn find_podcast(&self, id: RecordId) -> Result<Option<Podcast>>;

    async fn find_podcasts(&self) -> Result<Vec<Podcast>>;

    /// All episodes matching the query, in the store's natural order
    async fn find_episodes(&self, query: &EpisodeQuery) -> Result<Vec<Episode>>;

    /// Set the title of one podcast; returns the number of documents modified
    async fn update_podcast_title(&self, id: RecordId, title: &str) -> Result<u64>;

    /// Delete the first episode matching the query; returns the number deleted
    async fn delete_episode(&self, query: &EpisodeQuery) -> Result<u64>;
}

/// `PodcastStore` backed by a MongoDB database
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn from_connection(connection: &Connection) -> Self {
        Self::new(connection.database().clone())
    }
}

#[async_trait]
impl PodcastStore for MongoStore {
    #[instrument(skip_all, fields(title = %podcast.title))]
    async fn insert_podcast(&self, podcast: &Podcast) -> Result<RecordId> {
        let mut podcast = podcast.clone();
        let id = podcast.insert_one(&self.database).await?;
        debug!(%id, "Inserted podcast");
        Ok(id)
    }

    #[instrument(skip_all, fields(count = episodes.len()))]
    async fn insert_episodes(&self, episodes: &[Episode]) -> Result<Vec<RecordId>> {
        let mut episodes = episodes.to_vec();
        let ids = Episode::insert_many(&mut episodes, &self.database).await?;
        debug!(inserted = ids.len(), "Inserted episodes");
        Ok(ids)
    }

    async fn find_podcast(&self, id: RecordId) -> Result<Option<Podcast>> {
        Podcast::find_by_id(&self.database, id).await
    }

    async fn find_podcasts(&self) -> Result<Vec<Podcast>> {
        Podcast::find(&self.database, doc! {}).await
    }

    #[instrument(skip_all)]
    async fn find_episodes(&self, query: &EpisodeQuery) -> Result<Vec<Episode>> {
        let filter = query.to_filter();
        debug!(%filter, "Finding episodes");
        Episode::find(&self.database, filter).await
    }

    #[instrument(skip(self, title))]
    async fn update_podcast_title(&self, id: RecordId, title: &str) -> Result<u64> {
        let modified =
            Podcast::update_one(&self.database, doc! { "_id": id }, doc! { "title": title })
                .await?;
        debug!(modified, "Updated podcast title");
        Ok(modified)
    }

    #[instrument(skip_all)]
    async fn delete_episode(&self, query: &EpisodeQuery) -> Result<u64> {
        let filter = query.to_filter();
        let deleted = Episode::delete_one(&self.database, filter).await?;
        debug!(deleted, "Deleted episode");
        Ok(deleted)
    }
}
