use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use pizza_restaurant_service::store::Store;
use tracing_subscriber::EnvFilter;

pub mod app;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = "app.db", global = true)]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations and serve the HTTP API
    Serve {
        #[arg(long, env = "BIND_ADDRESS", default_value = "127.0.0.1:5555")]
        bind: SocketAddr,
    },
    /// Replace all data with the sample restaurants and pizzas
    Seed,
    /// Apply pending migrations only
    Migrate,
}

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let store = Store::new(cli.database_url);
    match cli.command {
        Commands::Serve { bind } => app::api::main(store, bind).await,
        Commands::Seed => app::seed::main(store),
        Commands::Migrate => app::migrate::main(store),
    }
}
