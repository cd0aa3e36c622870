//! Query builder for episode lookups

use bson::{doc, Document as BsonDocument};

use crate::id::RecordId;
use crate::models::Episode;

/// Conditions on episodes, combined with AND.
///
/// The same query renders to a BSON filter for MongoDB and evaluates
/// against records held in memory. An empty query matches every episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeQuery {
    podcast: Option<RecordId>,
    title: Option<String>,
    duration_gt: Option<i32>,
}

impl EpisodeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only episodes belonging to the given podcast
    pub fn podcast(mut self, podcast: RecordId) -> Self {
        self.podcast = Some(podcast);
        self
    }

    /// Only episodes whose title is exactly `title`
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Only episodes strictly longer than `minutes`
    pub fn duration_gt(mut self, minutes: i32) -> Self {
        self.duration_gt = Some(minutes);
        self
    }

    /// Render the MongoDB filter document
    pub fn to_filter(&self) -> BsonDocument {
        let mut filter = BsonDocument::new();
        if let Some(podcast) = self.podcast {
            filter.insert("podcast", podcast);
        }
        if let Some(title) = &self.title {
            filter.insert("title", title.as_str());
        }
        if let Some(minutes) = self.duration_gt {
            filter.insert("duration", doc! { "$gt": minutes });
        }
        filter
    }

    /// Evaluate the query against an in-memory episode
    pub fn matches(&self, episode: &Episode) -> bool {
        if let Some(podcast) = self.podcast {
            if episode.podcast != podcast {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if &episode.title != title {
                return false;
            }
        }
        if let Some(minutes) = self.duration_gt {
            if episode.duration <= minutes {
                return false;
            }
        }
        true
    }
}
