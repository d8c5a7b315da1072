//! Strategy and scheduling advisors.
//!
//! An [`Advisor`] looks at the site inventory and produces advisory output:
//! a project analysis, a deployment schedule, or a swap procedure for one
//! site. Two implementations exist:
//!
//! - [`LocalStrategyEngine`]: deterministic heuristics, works offline
//! - [`GeminiAdvisor`]: prompts the Gemini `generateContent` API and decodes
//!   the reply strictly (see [`decode`])
//!
//! Every advisor failure surfaces as
//! [`TrackerError::AdvisorUnavailable`](crate::TrackerError::AdvisorUnavailable),
//! which callers treat as non-fatal.

use async_trait::async_trait;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Site, SwapStep},
};

mod config;
pub mod decode;
mod gemini;
mod local;

pub use config::{AdvisorConfig, AdvisorMode};
pub use decode::SchemaViolation;
pub use gemini::{GeminiAdvisor, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use local::LocalStrategyEngine;

/// Portfolio-level assessment of the swap project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectAnalysis {
    pub insights: Vec<String>,
    pub risks: Vec<String>,
    pub priorities: Vec<String>,
    /// Health score formatted as a percentage, e.g. `85%`
    pub health_percent: String,
}

impl ProjectAnalysis {
    /// Numeric value of [`Self::health_percent`].
    pub fn health_score(&self) -> Option<u8> {
        self.health_percent
            .trim()
            .strip_suffix('%')
            .and_then(|n| n.trim().parse().ok())
    }
}

/// Proposed swap date for one site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub site_id: String,
    pub scheduled_date: Date,
    pub rationale: String,
}

/// Step-by-step procedure for swapping one site's equipment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapPlan {
    pub steps: Vec<SwapStep>,
    pub alerts: Vec<String>,
}

/// Source of strategy and scheduling recommendations.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Short identifier shown in logs and output.
    fn name(&self) -> &str;

    /// Assess overall project health, risks and priority sites.
    async fn analyze(&self, sites: &[Site]) -> Result<ProjectAnalysis>;

    /// Propose dates for every site that is not yet completed.
    async fn schedule(&self, sites: &[Site]) -> Result<Vec<ScheduleEntry>>;

    /// Produce the swap procedure for one site.
    async fn swap_plan(&self, site: &Site) -> Result<SwapPlan>;
}
