pub mod config;
pub mod db;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;

use tracing_subscriber::EnvFilter;

/// `RUST_LOG`-driven fmt subscriber; also captures `log` records (actix access logs).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // repeat calls (tests sharing a process) keep the first subscriber
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!(error = %e, "tracing already initialised");
    }
}
