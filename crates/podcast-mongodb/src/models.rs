//! Podcast and episode records

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::id::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<RecordId>,
    pub title: String,
    pub author: String,
    /// Omitted from the stored document when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Podcast {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl Document for Podcast {
    fn collection_name() -> &'static str {
        "podcasts"
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

/// A single episode of a podcast.
///
/// `podcast` refers to the owning `Podcast` by identifier. Nothing checks
/// that the podcast exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<RecordId>,
    pub podcast: RecordId,
    pub title: String,
    pub description: String,
    /// Length in minutes
    pub duration: i32,
}

impl Episode {
    pub fn new(
        podcast: RecordId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: i32,
    ) -> Self {
        Self {
            id: None,
            podcast,
            title: title.into(),
            description: description.into(),
            duration,
        }
    }
}

impl Document for Episode {
    fn collection_name() -> &'static str {
        "episodes"
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_collection_names() {
        assert_eq!(Podcast::collection_name(), "podcasts");
        assert_eq!(Episode::collection_name(), "episodes");
    }

    #[test]
    fn test_podcast_field_names() {
        let podcast = Podcast::new("The Polyglot Developer", "Nic Raboy")
            .with_tags(["development", "programming"]);

        let bson = podcast.to_bson().unwrap();
        assert_eq!(bson.get_str("title").unwrap(), "The Polyglot Developer");
        assert_eq!(bson.get_str("author").unwrap(), "Nic Raboy");
        assert_eq!(bson.get_array("tags").unwrap().len(), 2);
        assert!(!bson.contains_key("_id"));
    }

    #[test]
    fn test_podcast_empty_tags_omitted() {
        let bson = Podcast::new("Untagged", "Nobody").to_bson().unwrap();
        assert!(!bson.contains_key("tags"));
    }

    #[test]
    fn test_podcast_absent_tags_read_as_empty() {
        let podcast = Podcast::from_bson(doc! { "title": "t", "author": "a" }).unwrap();
        assert!(podcast.tags.is_empty());
    }

    #[test]
    fn test_episode_references_podcast_by_object_id() {
        let podcast_id = RecordId::generate();
        let episode = Episode::new(podcast_id, "Pilot", "First one", 25);

        let bson = episode.to_bson().unwrap();
        assert_eq!(bson.get_object_id("podcast").unwrap().to_hex(), podcast_id.to_hex());
        assert_eq!(bson.get_i32("duration").unwrap(), 25);
    }

    #[test]
    fn test_episode_bson_roundtrip_keeps_id() {
        let mut episode = Episode::new(RecordId::generate(), "Pilot", "First one", 32);
        episode.set_id(RecordId::generate());

        let recovered = Episode::from_bson(episode.to_bson().unwrap()).unwrap();
        assert_eq!(recovered, episode);
    }
}
