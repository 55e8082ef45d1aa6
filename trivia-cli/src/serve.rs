use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db;
use trivia_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = db::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let bind_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port")?;

    let pool = db::create_pool(&args.database_url, args.max_connections)
        .await
        .context("could not connect to database")?;
    tracing::info!(max_connections = args.max_connections, "database pool ready");

    run_server(pool, ServerConfig { bind_addr }).await?;
    Ok(())
}
