//! MongoDB storage for podcast-crud
//!
//! This crate holds everything the CRUD sequence talks to:
//! - `Connection`: one driver client bound to a database
//! - `Document`: generic BSON CRUD over a collection
//! - `Podcast` / `Episode`: the two record types
//! - `PodcastStore`: the operations the sequence needs, backed either by
//!   MongoDB (`MongoStore`) or by process memory (`MemoryStore`)

pub mod connection;
pub mod document;
pub mod id;
pub mod memory;
pub mod models;
pub mod query;
pub mod store;

pub use connection::{ClientConfig, Connection};
pub use document::Document;
pub use id::RecordId;
pub use memory::MemoryStore;
pub use models::{Episode, Podcast};
pub use podcast_common::{PodcastError, Result};
pub use query::EpisodeQuery;
pub use store::{MongoStore, PodcastStore};
