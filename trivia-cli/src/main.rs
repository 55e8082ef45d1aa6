//! trivia - CLI entry point for the trivia question bank API
//!
//! Usage:
//!   trivia serve                       # serve on 127.0.0.1:5000
//!   trivia serve --port 8080
//!   RUST_LOG=trivia_server=debug trivia serve

use anyhow::Result;
use clap::{Parser, Subcommand};

mod serve;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "HTTP API server for the trivia question bank"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
    }
}
