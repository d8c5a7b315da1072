//! swaptrack CLI
//!
//! Command-line front end for tracking a nationwide radio equipment swap.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{AppState, Cli};
use log::info;
use renderer::TerminalRenderer;
use swaptrack_core::{params::ListSites, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let advisor = args.advisor_config().build();
    let Args {
        database_file,
        no_color,
        command,
        ..
    } = args;

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;
    let session = tracker
        .restore_session()
        .await
        .context("Failed to restore session")?;

    info!(
        "swaptrack started with {} advisor, {}",
        advisor.name(),
        match session.user() {
            Some(user) => format!("signed in as {}", user.email),
            None => "not signed in".to_string(),
        }
    );

    let state = AppState {
        tracker,
        session,
        advisor,
    };
    let mut cli = Cli::new(state, TerminalRenderer::new(!no_color));

    let outcome = match command {
        Some(Auth { command }) => cli.handle_auth_command(command).await,
        Some(Site { command }) => cli.handle_site_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Dashboard) => cli.dashboard().await,
        Some(Regions) => cli.regions().await,
        Some(Advisor { command }) => cli.handle_advisor_command(command).await,
        Some(Db { command }) => cli.handle_db_command(command).await,
        None => cli.list_sites(&ListSites::default()).await,
    };

    cli.report(outcome)
}
