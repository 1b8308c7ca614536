mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pluggy_api::Client;

const DEFAULT_BASE_URL: &str = "https://api.pluggy.ai";

#[derive(Parser)]
#[command(name = "pluggy")]
#[command(about = "Explore the Pluggy aggregation API from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify that the configured API key works
    Auth,
    /// Create a connect token for frontend use
    Token,
    /// List available connectors
    Connectors(commands::connectors::ConnectorsArgs),
    /// Run the sandbox connect flow end to end
    Connect(commands::connect::ConnectArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pluggy=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let api_key = std::env::var("PLUGGY_API_KEY")
        .context("PLUGGY_API_KEY environment variable is not set")?;
    let base_url =
        std::env::var("PLUGGY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = Client::with_base_url(&base_url, api_key)?;

    match &cli.command {
        Commands::Auth => commands::auth::run(&client).await?,
        Commands::Token => commands::token::run(&client).await?,
        Commands::Connectors(args) => commands::connectors::run(args, &client).await?,
        Commands::Connect(args) => commands::connect::run(args, &client, &base_url).await?,
    }

    Ok(())
}
