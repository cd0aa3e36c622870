//! MongoDB connection management

use bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use podcast_common::{PodcastError, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Client options the program may override.
///
/// Anything left as `None` keeps the driver's default.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application name for server logs
    pub app_name: Option<String>,
    /// Connection timeout (default: driver default)
    pub connect_timeout: Option<Duration>,
    /// Server selection timeout (default: driver default)
    pub server_selection_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_name: Some("podcast-crud".to_string()),
            connect_timeout: None,
            server_selection_timeout: None,
        }
    }
}

/// One MongoDB client bound to a single database
pub struct Connection {
    client: Client,
    database: Database,
    database_name: String,
}

impl Connection {
    /// Create a new MongoDB connection with default client options
    pub async fn new(connection_string: &str, database_name: &str) -> Result<Self> {
        Self::with_config(connection_string, database_name, ClientConfig::default()).await
    }

    /// Create a new MongoDB connection with custom client options
    pub async fn with_config(
        connection_string: &str,
        database_name: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut client_options = ClientOptions::parse(connection_string)
            .await
            .map_err(|e| PodcastError::Connection(e.to_string()))?;

        if let Some(connect) = config.connect_timeout {
            client_options.connect_timeout = Some(connect);
        }
        if let Some(server_sel) = config.server_selection_timeout {
            client_options.server_selection_timeout = Some(server_sel);
        }
        if let Some(app) = config.app_name {
            client_options.app_name = Some(app);
        }

        let client = Client::with_options(client_options)
            .map_err(|e| PodcastError::Connection(e.to_string()))?;
        let database = client.database(database_name);

        info!(database = database_name, "MongoDB client created");

        Ok(Self {
            client,
            database,
            database_name: database_name.to_string(),
        })
    }

    /// Get a reference to the database
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get the database name
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Check that the server is reachable and accepts our credentials
    pub async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| PodcastError::Connection(format!("Ping failed: {}", e)))?;
        debug!(database = %self.database_name, "Ping succeeded");
        Ok(())
    }

    /// Drop the current database (use with caution!)
    pub async fn drop_database(&self) -> Result<()> {
        self.database.drop().await?;
        Ok(())
    }

    /// Close the client, waiting for in-use resources to be returned
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!(database = %self.database_name, "MongoDB client closed");
    }
}
