//! Store properties against a live MongoDB server.
//!
//! These tests require a MongoDB server to be running.
//! Set MONGODB_URI (default mongodb://localhost:27017) and run with --ignored.

mod common;

use podcast_mongodb::{Connection, MongoStore, RecordId};

async fn connect() -> Connection {
    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    // A throwaway database per test keeps runs independent
    let database = format!("podcast_crud_test_{}", RecordId::generate());

    let conn = Connection::new(&uri, &database).await.unwrap();
    conn.ping().await.unwrap();
    conn
}

async fn cleanup(conn: Connection) {
    conn.drop_database().await.unwrap();
    conn.shutdown().await;
}

#[tokio::test]
#[ignore] // Only run with --ignored flag when database is available
async fn test_insert_then_read() {
    let conn = connect().await;
    common::insert_then_read(&MongoStore::from_connection(&conn)).await;
    cleanup(conn).await;
}

#[tokio::test]
#[ignore]
async fn test_duration_filter_is_strict() {
    let conn = connect().await;
    common::duration_filter_is_strict(&MongoStore::from_connection(&conn)).await;
    cleanup(conn).await;
}

#[tokio::test]
#[ignore]
async fn test_update_leaves_other_fields() {
    let conn = connect().await;
    common::update_leaves_other_fields(&MongoStore::from_connection(&conn)).await;
    cleanup(conn).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_is_precise() {
    let conn = connect().await;
    common::delete_is_precise(&MongoStore::from_connection(&conn)).await;
    cleanup(conn).await;
}
