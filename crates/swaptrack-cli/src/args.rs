use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swaptrack_core::advisor::{AdvisorConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};

use crate::cli::{
    AdvisorArg, AdvisorCommands, AuthCommands, DbCommands, SiteCommands, TaskCommands,
};

/// Main command-line interface for the swaptrack site swap tracker
///
/// Swaptrack follows a nationwide radio equipment swap: every cell site
/// carries a six-step deployment checklist, legacy and target equipment
/// records, and planned versus actual milestone dates. Checking off tasks
/// keeps each site's progress and status in step automatically. A strategy
/// advisor, either local heuristics or the Gemini API, produces project
/// analyses, deployment schedules and swap procedures.
#[derive(Parser)]
#[command(version, about, name = "swaptrack")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/swaptrack/swaptrack.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Strategy advisor backing the `advisor` commands
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = AdvisorArg::Local,
        env = "SWAPTRACK_ADVISOR"
    )]
    pub advisor: AdvisorArg,

    /// Gemini model name
    #[arg(long, global = true, default_value = DEFAULT_MODEL, env = "GEMINI_MODEL")]
    pub gemini_model: String,

    /// Gemini API key
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Base URL of the Gemini API
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub gemini_endpoint: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Advisor settings gathered from the global flags.
    pub fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig {
            mode: self.advisor.into(),
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            endpoint: self.gemini_endpoint.clone(),
        }
    }
}

/// Available commands for the swaptrack CLI
///
/// - `auth`: sign in and out; the session is remembered between runs
/// - `site`, `task`: inventory and checklist management
/// - `dashboard`, `regions`: project monitoring
/// - `advisor`: analysis, scheduling and swap procedures
/// - `db`: maintenance of the local database
#[derive(Subcommand)]
pub enum Commands {
    /// Register, sign in and sign out
    #[command(alias = "a")]
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Manage cell sites
    #[command(alias = "s")]
    Site {
        #[command(subcommand)]
        command: SiteCommands,
    },
    /// Manage a site's deployment checklist
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show project health statistics
    #[command(alias = "d")]
    Dashboard,
    /// Show per-region progress and site centroids
    Regions,
    /// Ask the strategy advisor
    Advisor {
        #[command(subcommand)]
        command: AdvisorCommands,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}
