//! Common utilities for podcast-crud
//!
//! This crate provides the error type shared by the store and the binary.

pub mod error;

pub use error::{PodcastError, Result};
