//! userdb CLI - HTTP service for inserting and listing user records
//!
//! Reads `DB_USER`, `DB_PASS`, `DB_HOST`, `DB_NAME` (and optional
//! `DB_PORT`) from the environment or a `.env` file.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{InitDbArgs, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "userdb",
    author,
    version,
    about = "Minimal user record service backed by Postgres"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the users table if needed, then serve HTTP
    Serve(ServeArgs),

    /// Create the users table if needed and exit
    InitDb(InitDbArgs),
}

impl Commands {
    fn debug(&self) -> bool {
        match self {
            Self::Serve(args) => args.debug,
            Self::InitDb(args) => args.debug,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the real environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.command.debug(),
    })
    .ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
