mod domain;
mod clients;
mod messages;
mod error;
mod config;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod actors;
mod user_actor;

mod seeder;
mod form;
mod view;
mod dashboard;
mod terminal;

use std::path::PathBuf;
use clap::Parser;
use tracing::info;
use crate::app_system::{DashboardSystem, setup_tracing};
use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::seeder::{HttpSeedSource, Seeder};
use crate::terminal::Terminal;

#[derive(Parser)]
#[command(name = "user_dashboard")]
#[command(about = "Manage a small in-memory list of users from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "USER_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Override the seed endpoint
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.seed.endpoint = endpoint;
        config.validate()?;
    }

    info!(endpoint = %config.seed.endpoint, "Starting user dashboard");

    let system = DashboardSystem::new(&config);
    let mut dashboard = Dashboard::new(
        system.user_client.clone(),
        system.notifier_client.clone(),
        config.ui.footer_owner.clone(),
    );
    let mut terminal = Terminal::new(tokio::io::stdin(), tokio::io::stdout());

    let source = HttpSeedSource::new(config.seed.endpoint.clone(), config.seed.timeout())?;
    let mut seeder = Seeder::new(source, &config.seed);
    dashboard.begin_loading();
    terminal.redraw(&dashboard).await?;
    dashboard.load(&mut seeder).await;

    terminal.run(&mut dashboard).await?;

    // Release the dashboard's clients so the store actor can stop.
    drop(dashboard);
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("User dashboard closed");
    Ok(())
}
