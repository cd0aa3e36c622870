//! podcast-crud - CRUD walkthrough against a MongoDB-compatible document store
//!
//! Usage:
//!   podcast-crud                         Run against the store named by TIGRIS_* variables
//!   podcast-crud --env-file ./dev.env    Load variables from another file first
//!   podcast-crud --in-memory             Dry run without credentials or network
//!   podcast-crud --log-level debug

use anyhow::{Context, Result};
use clap::Parser;
use futures::FutureExt;
use podcast_mongodb::{ClientConfig, Connection, MemoryStore, MongoStore};
use std::io;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

mod config;
mod sequence;

use config::Settings;
use sequence::{step, CrudReport};

#[derive(Parser, Debug)]
#[command(name = "podcast-crud")]
#[command(about = "Insert, find, update and delete podcast documents", long_about = None)]
#[command(version)]
struct Args {
    /// Env file loaded before reading the process environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    /// Application name reported to the server
    #[arg(long, default_value = "podcast-crud")]
    app_name: String,

    /// Connection timeout in seconds (driver default when unset)
    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    /// Server selection timeout in seconds (driver default when unset)
    #[arg(long)]
    server_selection_timeout_secs: Option<u64>,

    /// Use an in-process store instead of connecting to a server
    #[arg(long)]
    in_memory: bool,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            app_name: Some(self.app_name.clone()),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            server_selection_timeout: self.server_selection_timeout_secs.map(Duration::from_secs),
        }
    }
}

fn init_tracing(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

/// Cancel `token` on Ctrl-C
fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling");
            token.cancel();
        }
    });
}

fn log_report(report: &CrudReport) {
    info!(
        podcast = %report.podcast_id,
        episodes = report.episode_ids.len(),
        matched = report.matched.len(),
        modified = report.modified,
        deleted = report.deleted,
        "CRUD sequence complete"
    );
}

async fn run_in_memory(cancel: &CancellationToken) -> Result<()> {
    info!("Using in-memory store");
    let store = MemoryStore::new();
    let mut out = io::stdout();
    let report = sequence::run(&store, cancel, &mut out)
        .await
        .context("CRUD sequence failed")?;
    log_report(&report);
    Ok(())
}

/// Open the client and ping it, giving up as soon as `cancel` fires
async fn connect(
    settings: &Settings,
    cancel: &CancellationToken,
) -> podcast_common::Result<Connection> {
    let connection = step(
        cancel,
        "connect",
        Connection::with_config(
            &settings.credentials.connection_string(),
            &settings.project,
            settings.client.clone(),
        ),
    )
    .await?;

    let pinged = step(cancel, "ping", connection.ping()).await;
    match pinged {
        Ok(()) => Ok(connection),
        Err(e) => {
            connection.shutdown().await;
            Err(e)
        }
    }
}

async fn run_against_server(args: &Args, cancel: &CancellationToken) -> Result<()> {
    let settings = Settings::from_env(&args.env_file, args.client_config())
        .context("Failed to load settings")?;
    info!(credentials = ?settings.credentials, project = %settings.project, "Settings loaded");

    let connection = connect(&settings, cancel).await.context("Failed to connect")?;
    println!("Connected.");

    // Everything after this point must reach shutdown, panics included
    let outcome = AssertUnwindSafe(async {
        let store = MongoStore::from_connection(&connection);
        let mut out = io::stdout();
        sequence::run(&store, cancel, &mut out)
            .await
            .context("CRUD sequence failed")
    })
    .catch_unwind()
    .await;

    if !matches!(outcome, Ok(Ok(_))) {
        warn!("Closing connection after failure");
    }
    connection.shutdown().await;

    match outcome {
        Ok(result) => result.map(|report| log_report(&report)),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level)?;

    let cancel = CancellationToken::new();
    cancel_on_interrupt(cancel.clone());

    if args.in_memory {
        run_in_memory(&cancel).await
    } else {
        run_against_server(&args, &cancel).await
    }
}
