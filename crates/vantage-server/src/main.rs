//! vantage-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the dashboard read API over HTTP.
//!
//! The HTTP surface is read-only. Records enter the store through the
//! `--seed` flag, which bulk-loads a JSON array of records before serving:
//!
//! ```text
//! vantage-server --seed jsondata.json
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::http::{HeaderValue, Method};
use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use vantage_core::{record::NewRecord, store::RecordStore as _};
use vantage_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Vantage dashboard API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Bulk-load a JSON array of records into the store before serving.
  #[arg(long)]
  seed: Option<PathBuf>,
}

/// Runtime server configuration, deserialised from `config.toml` and the
/// `VANTAGE_*` environment.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:         String,
  #[serde(default = "default_port")]
  port:         u16,
  #[serde(default = "default_store_path")]
  store_path:   PathBuf,
  /// Origins the dashboard front end is served from.
  #[serde(default = "default_cors_origins")]
  cors_origins: Vec<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }
fn default_store_path() -> PathBuf { PathBuf::from("vantage.db") }
fn default_cors_origins() -> Vec<String> {
  vec!["http://localhost:3000".to_string()]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("VANTAGE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Bulk-load seed data, if requested.
  if let Some(seed_path) = &cli.seed {
    let raw = tokio::fs::read_to_string(seed_path)
      .await
      .with_context(|| format!("failed to read seed file {seed_path:?}"))?;
    let records: Vec<NewRecord> = serde_json::from_str(&raw)
      .with_context(|| format!("failed to parse seed file {seed_path:?}"))?;
    let inserted = store
      .insert_records(records)
      .await
      .context("failed to load seed records")?;
    tracing::info!("Loaded {inserted} records from {seed_path:?}");
  }

  // The dashboard front end lives on another origin; only GET is served.
  let origins = server_cfg
    .cors_origins
    .iter()
    .map(|o| {
      o.parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS origin {o:?}"))
    })
    .collect::<anyhow::Result<Vec<_>>>()?;
  let cors = CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods([Method::GET]);

  let app = vantage_api::api_router(Arc::new(store))
    .layer(cors)
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
