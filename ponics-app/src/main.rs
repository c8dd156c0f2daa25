use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ponics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = commands::Cli::parse();
    commands::run(cli)
}
