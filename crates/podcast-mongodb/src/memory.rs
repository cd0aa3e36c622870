//! In-process store following MongoDB's observable CRUD behaviour
//!
//! Collections keep insertion order, which stands in for MongoDB's natural
//! order. Batch inserts are ordered: documents before a duplicate key stay
//! inserted. Used by the test suite and by dry runs that should not touch a
//! server.

use async_trait::async_trait;
use parking_lot::Mutex;
use podcast_common::{PodcastError, Result};

use crate::id::RecordId;
use crate::models::{Episode, Podcast};
use crate::query::EpisodeQuery;
use crate::store::PodcastStore;

#[derive(Debug, Default)]
struct Collections {
    podcasts: Vec<Podcast>,
    episodes: Vec<Episode>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn podcast_count(&self) -> usize {
        self.inner.lock().podcasts.len()
    }

    pub fn episode_count(&self) -> usize {
        self.inner.lock().episodes.len()
    }
}

fn duplicate_key(collection: &str, id: RecordId) -> PodcastError {
    PodcastError::Database(format!(
        "E11000 duplicate key error collection: {} index: _id_ dup key: {}",
        collection, id
    ))
}

#[async_trait]
impl PodcastStore for MemoryStore {
    async fn insert_podcast(&self, podcast: &Podcast) -> Result<RecordId> {
        let mut inner = self.inner.lock();
        let id = podcast.id.unwrap_or_else(RecordId::generate);
        if inner.podcasts.iter().any(|p| p.id == Some(id)) {
            return Err(duplicate_key("podcasts", id));
        }

        let mut stored = podcast.clone();
        stored.id = Some(id);
        inner.podcasts.push(stored);
        Ok(id)
    }

    async fn insert_episodes(&self, episodes: &[Episode]) -> Result<Vec<RecordId>> {
        let mut inner = self.inner.lock();
        let mut ids = Vec::with_capacity(episodes.len());
        for episode in episodes {
            let id = episode.id.unwrap_or_else(RecordId::generate);
            // Ordered insert: stop at the first clash, keep what went in before it
            if inner.episodes.iter().any(|e| e.id == Some(id)) {
                return Err(duplicate_key("episodes", id));
            }
            let mut stored = episode.clone();
            stored.id = Some(id);
            inner.episodes.push(stored);
            ids.push(id);
        }

        Ok(ids)
    }

    async fn find_podcast(&self, id: RecordId) -> Result<Option<Podcast>> {
        let inner = self.inner.lock();
        Ok(inner.podcasts.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn find_podcasts(&self) -> Result<Vec<Podcast>> {
        Ok(self.inner.lock().podcasts.clone())
    }

    async fn find_episodes(&self, query: &EpisodeQuery) -> Result<Vec<Episode>> {
        let inner = self.inner.lock();
        Ok(inner
            .episodes
            .iter()
            .filter(|e| query.matches(e))
            .cloned()
            .collect())
    }

    async fn update_podcast_title(&self, id: RecordId, title: &str) -> Result<u64> {
        let mut inner = self.inner.lock();
        match inner.podcasts.iter_mut().find(|p| p.id == Some(id)) {
            // A no-op $set matches but does not modify
            Some(podcast) if podcast.title != title => {
                podcast.title = title.to_string();
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete_episode(&self, query: &EpisodeQuery) -> Result<u64> {
        let mut inner = self.inner.lock();
        match inner.episodes.iter().position(|e| query.matches(e)) {
            Some(index) => {
                inner.episodes.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
