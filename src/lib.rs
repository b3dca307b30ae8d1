pub mod cli;
pub mod clients;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;

pub use config::Config;

use clap::Parser;
use cli::{Cli, Commands, HistoryCommands};
use cli::{cmd_best_sellers, cmd_browse, cmd_history, cmd_history_remove, cmd_init, cmd_search};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Browse) => cmd_browse(&config).await,

        Some(Commands::Best) => cmd_best_sellers(&config).await,

        Some(Commands::Search { query }) => cmd_search(&config, &query.join(" ")).await,

        Some(Commands::History { command }) => match command {
            None => cmd_history(&config, 10).await,
            Some(HistoryCommands::List { limit }) => cmd_history(&config, limit).await,
            Some(HistoryCommands::Remove { keyword }) => {
                cmd_history_remove(&config, &keyword.join(" ")).await
            }
        },

        Some(Commands::Init) => cmd_init(),
    }
}
