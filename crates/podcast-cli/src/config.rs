//! Settings loaded once at startup from an env file and the process environment

use podcast_common::{PodcastError, Result};
use podcast_mongodb::ClientConfig;
use std::env;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

pub const URI_VAR: &str = "TIGRIS_URI";
pub const CLIENT_ID_VAR: &str = "TIGRIS_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "TIGRIS_CLIENT_SECRET";
pub const PROJECT_VAR: &str = "TIGRIS_PROJECT";

pub const MISSING_CREDENTIALS: &str = "You must set the 'TIGRIS_URI', 'TIGRIS_CLIENT_ID', and 'TIGRIS_CLIENT_SECRET' environment variables.";

/// Service location and client credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub uri: String,
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("uri", &self.uri)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

impl Credentials {
    /// Read the three required values through `lookup`.
    ///
    /// Fails if any of them is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        match (read(URI_VAR), read(CLIENT_ID_VAR), read(CLIENT_SECRET_VAR)) {
            (Some(uri), Some(client_id), Some(client_secret)) => Ok(Self {
                uri,
                client_id,
                client_secret,
            }),
            _ => Err(PodcastError::Config(MISSING_CREDENTIALS.to_string())),
        }
    }

    /// Connection string using PLAIN authentication.
    ///
    /// Values are embedded as-is; reserved URI characters in the id or
    /// secret are not percent-encoded.
    pub fn connection_string(&self) -> String {
        format!(
            "mongodb://{}:{}@{}/?authMechanism=PLAIN",
            self.client_id, self.client_secret, self.uri
        )
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    /// Database name; empty when unset
    pub project: String,
    pub client: ClientConfig,
}

impl Settings {
    /// Load the env file (if any), then read settings from the process environment
    pub fn from_env(env_file: &Path, client: ClientConfig) -> Result<Self> {
        load_env_file(env_file);
        Self::from_lookup(|key| env::var(key).ok(), client)
    }

    pub fn from_lookup<F>(lookup: F, client: ClientConfig) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup)?;
        let project = lookup(PROJECT_VAR).unwrap_or_default();

        Ok(Self {
            credentials,
            project,
            client,
        })
    }
}

/// Populate the process environment from `path`.
///
/// Variables already set are left alone. A missing or unreadable file is
/// not an error; returns whether the file was loaded.
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded env file");
            true
        }
        Err(e) => {
            info!(path = %path.display(), error = %e, "No .env file found");
            false
        }
    }
}
