//! HTTP server command
//!
//! Connects to the store, ensures the schema, then serves `/insert`,
//! `/select` and `/health`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use userdb_server::db::MemoryUserStore;
use userdb_server::{run_server, AppState, ServerConfig, UserStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:5000)
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Keep users in process memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn UserStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - records are not persisted");
        Arc::new(MemoryUserStore::new())
    } else {
        Arc::new(super::connect_store().await?)
    };

    tracing::info!("Starting userdb server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_is_all_interfaces() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert_eq!(args.bind, ServerConfig::default().bind_addr);
        assert!(!args.in_memory);
    }

    #[test]
    fn bind_flag_overrides_default() {
        let args = ServeArgs::try_parse_from(["serve", "--bind", "127.0.0.1:8080"]).unwrap();
        assert_eq!(args.bind.port(), 8080);
    }
}
