//! Store properties shared by the in-memory and live MongoDB suites.

use podcast_mongodb::{Episode, EpisodeQuery, Podcast, PodcastStore, RecordId};

pub fn sample_podcast() -> Podcast {
    Podcast::new("The Polyglot Developer", "Nic Raboy")
        .with_tags(["development", "programming", "coding"])
}

pub fn sample_episodes(podcast: RecordId) -> Vec<Episode> {
    vec![
        Episode::new(
            podcast,
            "GraphQL for API Development",
            "Learn about GraphQL from the co-creator of GraphQL, Lee Byron.",
            25,
        ),
        Episode::new(
            podcast,
            "Progressive Web Application Development",
            "Learn about PWA development with Tara Manicsic.",
            32,
        ),
    ]
}

pub async fn insert_then_read(store: &dyn PodcastStore) {
    let podcast = sample_podcast();
    let id = store.insert_podcast(&podcast).await.unwrap();

    let found = store.find_podcast(id).await.unwrap().expect("podcast should exist");
    assert_eq!(found.id, Some(id));
    assert_eq!(found.title, podcast.title);
    assert_eq!(found.author, podcast.author);
    assert_eq!(found.tags, podcast.tags);
}

pub async fn duration_filter_is_strict(store: &dyn PodcastStore) {
    let podcast = store.insert_podcast(&sample_podcast()).await.unwrap();
    store.insert_episodes(&sample_episodes(podcast)).await.unwrap();

    let found = store
        .find_episodes(&EpisodeQuery::new().duration_gt(25))
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].duration, 32);
    assert_eq!(found[0].title, "Progressive Web Application Development");
    assert_eq!(found[0].podcast, podcast);
}

pub async fn update_leaves_other_fields(store: &dyn PodcastStore) {
    let podcast = sample_podcast();
    let id = store.insert_podcast(&podcast).await.unwrap();

    let modified = store
        .update_podcast_title(id, "The Polyglot Developer Podcast")
        .await
        .unwrap();
    assert_eq!(modified, 1);

    let found = store.find_podcast(id).await.unwrap().expect("podcast should exist");
    assert_eq!(found.title, "The Polyglot Developer Podcast");
    assert_eq!(found.author, podcast.author);
    assert_eq!(found.tags, podcast.tags);
}

pub async fn delete_is_precise(store: &dyn PodcastStore) {
    let podcast = store.insert_podcast(&sample_podcast()).await.unwrap();
    let mut episodes = sample_episodes(podcast);
    // Same duration and description as the episode being deleted
    episodes.push(Episode::new(
        podcast,
        "GraphQL for API Development, Part 2",
        "Learn about GraphQL from the co-creator of GraphQL, Lee Byron.",
        25,
    ));
    store.insert_episodes(&episodes).await.unwrap();

    let deleted = store
        .delete_episode(&EpisodeQuery::new().title("GraphQL for API Development"))
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let remaining = store.find_episodes(&EpisodeQuery::new()).await.unwrap();
    let titles: Vec<&str> = remaining.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(remaining.len(), 2);
    assert!(!titles.contains(&"GraphQL for API Development"));
    assert!(titles.contains(&"GraphQL for API Development, Part 2"));
    assert!(titles.contains(&"Progressive Web Application Development"));
}
