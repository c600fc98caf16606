//! Create the users table and exit

use anyhow::Result;
use clap::Parser;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Ensure the schema exists without starting the server
pub async fn run_init_db(_args: InitDbArgs) -> Result<()> {
    super::connect_store().await?;
    tracing::info!("Users table is ready");
    Ok(())
}
