//! The fixed CRUD walkthrough: insert, insert many, find, update, delete.

use podcast_common::{PodcastError, Result};
use podcast_mongodb::{Episode, EpisodeQuery, Podcast, PodcastStore, RecordId};
use serde::Serialize;
use std::future::Future;
use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub const PODCAST_TITLE: &str = "The Polyglot Developer";
pub const PODCAST_AUTHOR: &str = "Nic Raboy";
pub const PODCAST_TAGS: [&str; 3] = ["development", "programming", "coding"];
pub const UPDATED_PODCAST_TITLE: &str = "The Polyglot Developer Podcast";

pub const GRAPHQL_EPISODE: &str = "GraphQL for API Development";
pub const PWA_EPISODE: &str = "Progressive Web Application Development";

/// Episodes strictly longer than this many minutes are read back
pub const DURATION_THRESHOLD: i32 = 25;

/// What the walkthrough did, for callers that want more than the printed lines
#[derive(Debug, Clone)]
pub struct CrudReport {
    pub podcast_id: RecordId,
    pub episode_ids: Vec<RecordId>,
    pub matched: Vec<Episode>,
    pub modified: u64,
    pub deleted: u64,
}

fn sample_podcast() -> Podcast {
    Podcast::new(PODCAST_TITLE, PODCAST_AUTHOR).with_tags(PODCAST_TAGS)
}

fn sample_episodes(podcast: RecordId) -> Vec<Episode> {
    vec![
        Episode::new(
            podcast,
            GRAPHQL_EPISODE,
            "Learn about GraphQL from the co-creator of GraphQL, Lee Byron.",
            25,
        ),
        Episode::new(
            podcast,
            PWA_EPISODE,
            "Learn about PWA development with Tara Manicsic.",
            32,
        ),
    ]
}

/// Run one step unless the token is cancelled first
pub(crate) async fn step<T, F>(cancel: &CancellationToken, name: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(PodcastError::Cancelled(name.to_string())),
        result = fut => result,
    }
}

/// JSON with four-space indentation
pub fn to_indented_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| PodcastError::Serialization(e.to_string()))
}

/// Run the walkthrough against `store`, writing one summary per step to `out`.
///
/// Stops at the first failing step; earlier steps are not rolled back.
pub async fn run<W: Write>(
    store: &dyn PodcastStore,
    cancel: &CancellationToken,
    out: &mut W,
) -> Result<CrudReport> {
    // InsertOne
    let podcast_id = step(cancel, "insert podcast", store.insert_podcast(&sample_podcast())).await?;
    info!(%podcast_id, "Inserted podcast");
    writeln!(out, "Inserted document into podcast collection: {}", podcast_id)?;

    // InsertMany
    let episodes = sample_episodes(podcast_id);
    let episode_ids = step(cancel, "insert episodes", store.insert_episodes(&episodes)).await?;
    writeln!(out, "Inserted {} documents into episode collection!", episode_ids.len())?;

    // Find
    let query = EpisodeQuery::new().duration_gt(DURATION_THRESHOLD);
    let matched = step(cancel, "find episodes", store.find_episodes(&query)).await?;
    let json = to_indented_json(&matched)?;
    writeln!(out, "Found {} documents matching filter!", matched.len())?;
    writeln!(out, "{}", json)?;

    // Update
    let modified = step(
        cancel,
        "update podcast",
        store.update_podcast_title(podcast_id, UPDATED_PODCAST_TITLE),
    )
    .await?;
    writeln!(out, "Updated {} Documents!", modified)?;

    // Delete
    let query = EpisodeQuery::new().title(GRAPHQL_EPISODE);
    let deleted = step(cancel, "delete episode", store.delete_episode(&query)).await?;
    writeln!(out, "DeleteOne removed {} document(s)", deleted)?;

    Ok(CrudReport {
        podcast_id,
        episode_ids,
        matched,
        modified,
        deleted,
    })
}
