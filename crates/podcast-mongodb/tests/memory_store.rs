//! Store properties against the in-memory store.

mod common;

use podcast_mongodb::MemoryStore;

#[tokio::test]
async fn test_insert_then_read() {
    common::insert_then_read(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_duration_filter_is_strict() {
    common::duration_filter_is_strict(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_update_leaves_other_fields() {
    common::update_leaves_other_fields(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_delete_is_precise() {
    common::delete_is_precise(&MemoryStore::new()).await;
}
