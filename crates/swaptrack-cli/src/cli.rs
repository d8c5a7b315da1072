//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry clap attributes and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! Each handler returns the markdown to render, or the error to turn into an
//! [`OperationStatus`] banner at the action boundary.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use swaptrack_core::{
    advisor::AdvisorMode,
    models::{EquipmentRole, MilestoneKind, RiskLevel},
    params::{
        Id, ListSites, Login, Register, SaveSite, SetEquipment, SetMilestone, ToggleTask,
    },
    Advisor, CreateResult, DeleteResult, OperationStatus, Schedule, Session, SiteStatus,
    ToggleOutcome, Tracker, TrackerError, UpdateResult, Vendor,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Argument wrappers
// ============================================================================

/// Create an account and sign in
#[derive(Args)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    /// Email address, also the login name
    #[arg(long)]
    pub email: String,
    /// Password
    #[arg(long, env = "SWAPTRACK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl From<RegisterArgs> for Register {
    fn from(val: RegisterArgs) -> Self {
        Register {
            name: val.name,
            email: val.email,
            password: val.password,
        }
    }
}

/// Sign in with email and password
#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    pub email: String,
    /// Password
    #[arg(long, env = "SWAPTRACK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl From<LoginArgs> for Login {
    fn from(val: LoginArgs) -> Self {
        Login {
            email: val.email,
            password: val.password,
        }
    }
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in
    Register(RegisterArgs),
    /// Sign in
    Login(LoginArgs),
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
}

/// Editable site attributes shared by `site create` and `site update`
#[derive(Args)]
pub struct SiteFieldsArgs {
    /// Display name of the site
    #[arg(short, long)]
    pub name: Option<String>,
    /// Region the site belongs to
    #[arg(short, long)]
    pub region: Option<String>,
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,
    /// Legacy vendor currently on site
    #[arg(long, value_enum)]
    pub vendor: Option<VendorArg>,
    /// Site status; Completed only when every task is done
    #[arg(short, long, value_enum)]
    pub status: Option<SiteStatusArg>,
    /// Swap risk assessment
    #[arg(long, value_enum)]
    pub risk: Option<RiskArg>,
    /// Scheduled swap date (YYYY-MM-DD)
    #[arg(long)]
    pub scheduled: Option<Date>,
    /// Field team assigned to the site; an empty value clears it
    #[arg(long)]
    pub team: Option<String>,
}

impl SiteFieldsArgs {
    fn into_params(self, id: String) -> SaveSite {
        SaveSite {
            id,
            name: self.name,
            region: self.region,
            lat: self.lat,
            lng: self.lng,
            current_vendor: self.vendor.map(Into::into),
            status: self.status.map(Into::into),
            risk_level: self.risk.map(Into::into),
            scheduled_date: self.scheduled,
            assigned_team: self.team,
        }
    }
}

/// Register a new site
#[derive(Args)]
pub struct CreateSiteArgs {
    /// Site ID, e.g. PH-G-0001
    pub id: String,
    #[command(flatten)]
    pub fields: SiteFieldsArgs,
}

impl From<CreateSiteArgs> for SaveSite {
    fn from(val: CreateSiteArgs) -> Self {
        val.fields.into_params(val.id)
    }
}

/// Edit an existing site
#[derive(Args)]
pub struct UpdateSiteArgs {
    /// Site ID
    pub id: String,
    #[command(flatten)]
    pub fields: SiteFieldsArgs,
}

impl From<UpdateSiteArgs> for SaveSite {
    fn from(val: UpdateSiteArgs) -> Self {
        val.fields.into_params(val.id)
    }
}

/// List sites, optionally filtered
#[derive(Args)]
pub struct ListSitesArgs {
    /// Case-insensitive search over site ID and name
    #[arg(short, long)]
    pub query: Option<String>,
    /// Only show sites with this status
    #[arg(short, long, value_enum)]
    pub status: Option<SiteStatusArg>,
}

impl From<ListSitesArgs> for ListSites {
    fn from(val: ListSitesArgs) -> Self {
        ListSites {
            query: val.query,
            status: val.status.map(Into::into),
        }
    }
}

/// Arguments naming a single site
#[derive(Args)]
pub struct SiteIdArgs {
    /// Site ID
    pub id: String,
}

impl From<SiteIdArgs> for Id {
    fn from(val: SiteIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a site with all of its records
#[derive(Args)]
pub struct DeleteSiteArgs {
    /// Site ID
    pub id: String,
    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

/// Record equipment details
#[derive(Args)]
pub struct EquipmentArgs {
    /// Site ID
    pub site_id: String,
    /// Legacy module being removed or target module being installed
    #[arg(value_enum)]
    pub role: EquipmentRoleArg,
    /// Equipment model
    #[arg(short, long)]
    pub model: Option<String>,
    /// Serial number
    #[arg(long)]
    pub serial: Option<String>,
}

impl From<EquipmentArgs> for SetEquipment {
    fn from(val: EquipmentArgs) -> Self {
        SetEquipment {
            site_id: val.site_id,
            role: val.role.into(),
            model: val.model,
            serial_number: val.serial,
        }
    }
}

/// Record planned and actual milestone dates
#[derive(Args)]
pub struct MilestoneArgs {
    /// Site ID
    pub site_id: String,
    /// Milestone to record
    #[arg(value_enum)]
    pub kind: MilestoneArg,
    /// Planned date (YYYY-MM-DD)
    #[arg(long)]
    pub planned: Option<Date>,
    /// Actual date (YYYY-MM-DD)
    #[arg(long)]
    pub actual: Option<Date>,
}

impl From<MilestoneArgs> for SetMilestone {
    fn from(val: MilestoneArgs) -> Self {
        SetMilestone {
            site_id: val.site_id,
            kind: val.kind.into(),
            planned: val.planned,
            actual: val.actual,
        }
    }
}

#[derive(Subcommand)]
pub enum SiteCommands {
    /// Register a new site
    #[command(alias = "c")]
    Create(CreateSiteArgs),
    /// List sites
    #[command(aliases = ["l", "ls"])]
    List(ListSitesArgs),
    /// Show a site with tasks, equipment and milestones
    #[command(alias = "s")]
    Show(SiteIdArgs),
    /// Edit site attributes
    #[command(alias = "u")]
    Update(UpdateSiteArgs),
    /// Delete a site permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteSiteArgs),
    /// Record legacy or target equipment
    #[command(alias = "e")]
    Equipment(EquipmentArgs),
    /// Record milestone dates
    #[command(alias = "m")]
    Milestone(MilestoneArgs),
}

/// Check or uncheck a checklist task
#[derive(Args)]
pub struct ToggleTaskArgs {
    /// Site ID
    pub site_id: String,
    /// Task ID, 1 to 6 for the default checklist
    pub task_id: String,
}

impl From<ToggleTaskArgs> for ToggleTask {
    fn from(val: ToggleTaskArgs) -> Self {
        ToggleTask {
            site_id: val.site_id,
            task_id: val.task_id,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show a site's checklist
    #[command(aliases = ["l", "ls"])]
    List(SiteIdArgs),
    /// Check or uncheck a task
    #[command(alias = "t")]
    Toggle(ToggleTaskArgs),
}

#[derive(Subcommand)]
pub enum AdvisorCommands {
    /// Analyze project health, risks and priorities
    Analyze,
    /// Schedule every open site
    Schedule,
    /// Generate and store a swap procedure for a site
    SwapPlan(SiteIdArgs),
}

/// Delete every site
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm removing all sites
    #[arg(long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum DbCommands {
    /// Delete every site; accounts are kept
    Clear(ClearArgs),
}

// ============================================================================
// Value enums
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SiteStatusArg {
    Pending,
    Surveyed,
    Planned,
    InProgress,
    Completed,
    Blocked,
}

impl From<SiteStatusArg> for SiteStatus {
    fn from(val: SiteStatusArg) -> Self {
        match val {
            SiteStatusArg::Pending => SiteStatus::Pending,
            SiteStatusArg::Surveyed => SiteStatus::Surveyed,
            SiteStatusArg::Planned => SiteStatus::Planned,
            SiteStatusArg::InProgress => SiteStatus::InProgress,
            SiteStatusArg::Completed => SiteStatus::Completed,
            SiteStatusArg::Blocked => SiteStatus::Blocked,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RiskArg {
    Low,
    Medium,
    High,
}

impl From<RiskArg> for RiskLevel {
    fn from(val: RiskArg) -> Self {
        match val {
            RiskArg::Low => RiskLevel::Low,
            RiskArg::Medium => RiskLevel::Medium,
            RiskArg::High => RiskLevel::High,
        }
    }
}

/// Legacy vendors a site can be swapped away from
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum VendorArg {
    Huawei,
    Nokia,
}

impl From<VendorArg> for Vendor {
    fn from(val: VendorArg) -> Self {
        match val {
            VendorArg::Huawei => Vendor::Huawei,
            VendorArg::Nokia => Vendor::Nokia,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum EquipmentRoleArg {
    /// Module being removed
    Legacy,
    /// Ericsson module being installed
    Target,
}

impl From<EquipmentRoleArg> for EquipmentRole {
    fn from(val: EquipmentRoleArg) -> Self {
        match val {
            EquipmentRoleArg::Legacy => EquipmentRole::Legacy,
            EquipmentRoleArg::Target => EquipmentRole::Target,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MilestoneArg {
    Survey,
    Installation,
    Integration,
    Acceptance,
}

impl From<MilestoneArg> for MilestoneKind {
    fn from(val: MilestoneArg) -> Self {
        match val {
            MilestoneArg::Survey => MilestoneKind::Survey,
            MilestoneArg::Installation => MilestoneKind::Installation,
            MilestoneArg::Integration => MilestoneKind::Integration,
            MilestoneArg::Acceptance => MilestoneKind::Acceptance,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AdvisorArg {
    /// Offline heuristics
    Local,
    /// Gemini API, needs an API key
    #[value(alias = "ai")]
    Gemini,
}

impl From<AdvisorArg> for AdvisorMode {
    fn from(val: AdvisorArg) -> Self {
        match val {
            AdvisorArg::Local => AdvisorMode::Local,
            AdvisorArg::Gemini => AdvisorMode::Gemini,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Everything an action needs: storage, the current session and the advisor.
pub struct AppState {
    pub tracker: Tracker,
    pub session: Session,
    pub advisor: Box<dyn Advisor>,
}

type Output = swaptrack_core::Result<String>;

pub struct Cli {
    state: AppState,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(state: AppState, renderer: TerminalRenderer) -> Self {
        Self { state, renderer }
    }

    /// Renders an action's output, or its error as a status banner.
    ///
    /// Advisor failures are warnings and still exit successfully.
    pub fn report(&self, outcome: Output) -> Result<ExitCode> {
        match outcome {
            Ok(output) => {
                self.renderer.render(&output)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                let status = OperationStatus::from_error(&error);
                self.renderer.render_status(&status)?;
                Ok(if status.is_failure() {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                })
            }
        }
    }

    pub async fn handle_auth_command(&mut self, command: AuthCommands) -> Output {
        let AppState {
            tracker, session, ..
        } = &mut self.state;

        match command {
            AuthCommands::Register(args) => {
                let user = tracker.register(session, &args.into()).await?;
                Ok(format!(
                    "{}\n{user}",
                    OperationStatus::success(format!("Registered and signed in as {}", user.name))
                ))
            }
            AuthCommands::Login(args) => {
                let user = tracker.login(session, &args.into()).await?;
                Ok(format!(
                    "{}\n{user}",
                    OperationStatus::success(format!("Signed in as {}", user.name))
                ))
            }
            AuthCommands::Logout => {
                if !session.is_authenticated() {
                    return Ok("Not signed in.\n".to_string());
                }
                tracker.logout(session).await?;
                Ok(OperationStatus::success("Signed out").to_string())
            }
            AuthCommands::Whoami => Ok(match session.user() {
                Some(user) => user.to_string(),
                None => "Not signed in.\n".to_string(),
            }),
        }
    }

    pub async fn handle_site_command(&self, command: SiteCommands) -> Output {
        let AppState {
            tracker, session, ..
        } = &self.state;

        match command {
            SiteCommands::Create(args) => {
                let site = tracker.create_site(session, &args.into()).await?;
                Ok(CreateResult::new(site).to_string())
            }
            SiteCommands::List(args) => self.list_sites(&args.into()).await,
            SiteCommands::Show(args) => {
                let site = tracker.show_site(&args.into()).await?;
                Ok(site.to_string())
            }
            SiteCommands::Update(args) => {
                let outcome = tracker.update_site(session, &args.into()).await?;
                Ok(UpdateResult::with_changes(outcome.site, outcome.changes).to_string())
            }
            SiteCommands::Delete(args) => {
                if !args.yes {
                    return Err(TrackerError::invalid_input("yes").with_reason(format!(
                        "Deleting site {} removes its tasks, equipment and milestones; pass --yes to confirm",
                        args.id
                    )));
                }
                let site = tracker.delete_site(session, &Id { id: args.id }).await?;
                Ok(DeleteResult::new(site).to_string())
            }
            SiteCommands::Equipment(args) => {
                let role = EquipmentRole::from(args.role);
                let site = tracker.set_equipment(session, &args.into()).await?;
                Ok(format!(
                    "{}\n{site}",
                    OperationStatus::success(format!(
                        "Recorded {} equipment on site {}",
                        role, site.id
                    ))
                ))
            }
            SiteCommands::Milestone(args) => {
                let kind = MilestoneKind::from(args.kind);
                let site = tracker.set_milestone(session, &args.into()).await?;
                Ok(format!(
                    "{}\n{site}",
                    OperationStatus::success(format!("Recorded {kind} milestone on site {}", site.id))
                ))
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Output {
        let AppState {
            tracker, session, ..
        } = &self.state;

        match command {
            TaskCommands::List(args) => {
                let tasks = tracker.list_tasks(&args.into()).await?;
                Ok(tasks.to_string())
            }
            TaskCommands::Toggle(args) => {
                let params: ToggleTask = args.into();
                let outcome = tracker.toggle_task(session, &params).await?;
                Ok(match outcome {
                    ToggleOutcome::Updated(site) => {
                        let done = site
                            .tasks
                            .iter()
                            .find(|task| task.id == params.task_id)
                            .is_some_and(|task| task.is_completed);
                        let status = OperationStatus::success(format!(
                            "Task {} on site {} marked {}. Progress {}% ({})",
                            params.task_id,
                            site.id,
                            if done { "done" } else { "open" },
                            site.progress,
                            site.status
                        ));
                        format!("{status}\n{site}")
                    }
                    ToggleOutcome::Unchanged(site) => OperationStatus::warning(format!(
                        "Site {} has no task {}; nothing changed",
                        site.id, params.task_id
                    ))
                    .to_string(),
                })
            }
        }
    }

    pub async fn handle_advisor_command(&self, command: AdvisorCommands) -> Output {
        let AppState {
            tracker,
            session,
            advisor,
        } = &self.state;

        match command {
            AdvisorCommands::Analyze => {
                let analysis = tracker.run_analysis(session, advisor.as_ref()).await?;
                Ok(analysis.to_string())
            }
            AdvisorCommands::Schedule => {
                let entries = tracker.auto_schedule(session, advisor.as_ref()).await?;
                Ok(Schedule(entries).to_string())
            }
            AdvisorCommands::SwapPlan(args) => {
                let site = tracker
                    .generate_swap_plan(session, advisor.as_ref(), &args.into())
                    .await?;
                Ok(format!(
                    "{}\n{site}",
                    OperationStatus::success(format!(
                        "Generated swap procedure for site {}",
                        site.id
                    ))
                ))
            }
        }
    }

    pub async fn handle_db_command(&self, command: DbCommands) -> Output {
        match command {
            DbCommands::Clear(args) => {
                if !args.yes {
                    return Err(TrackerError::invalid_input("yes")
                        .with_reason("Clearing removes every site; pass --yes to confirm"));
                }
                let removed = self.state.tracker.clear_sites(&self.state.session).await?;
                Ok(OperationStatus::success(format!("Removed {removed} sites")).to_string())
            }
        }
    }

    pub async fn list_sites(&self, params: &ListSites) -> Output {
        let sites = self.state.tracker.list_sites(params).await?;
        Ok(sites.to_string())
    }

    pub async fn dashboard(&self) -> Output {
        let stats = self.state.tracker.dashboard().await?;
        Ok(stats.to_string())
    }

    pub async fn regions(&self) -> Output {
        let stats = self.state.tracker.dashboard().await?;
        if stats.regions.is_empty() {
            return Ok("No sites registered.\n".to_string());
        }
        let mut output = String::from("# Regions\n\n");
        for region in &stats.regions {
            output.push_str(&region.to_string());
        }
        Ok(output)
    }
}
