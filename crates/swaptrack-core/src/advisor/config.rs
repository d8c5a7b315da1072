//! Advisor selection and construction.

use std::{fmt, str::FromStr};

use super::{Advisor, GeminiAdvisor, LocalStrategyEngine, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Which advisor implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdvisorMode {
    /// Offline heuristics
    #[default]
    Local,
    /// Gemini API
    Gemini,
}

impl AdvisorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisorMode::Local => "local",
            AdvisorMode::Gemini => "gemini",
        }
    }
}

impl fmt::Display for AdvisorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdvisorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(AdvisorMode::Local),
            "gemini" | "ai" => Ok(AdvisorMode::Gemini),
            _ => Err(format!("Invalid advisor: {s} (expected 'local' or 'gemini')")),
        }
    }
}

/// Settings for building an [`Advisor`].
///
/// # Examples
///
/// ```rust
/// use swaptrack_core::advisor::{AdvisorConfig, AdvisorMode};
///
/// let advisor = AdvisorConfig {
///     mode: AdvisorMode::Gemini,
///     api_key: None,
///     ..Default::default()
/// }
/// .build();
/// // Construction succeeds; calls fail until a key is configured
/// assert_eq!(advisor.name(), "gemini");
/// ```
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub mode: AdvisorMode,
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            mode: AdvisorMode::Local,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Builds the configured advisor.
    pub fn build(self) -> Box<dyn Advisor> {
        match self.mode {
            AdvisorMode::Local => Box::new(LocalStrategyEngine::new()),
            AdvisorMode::Gemini => {
                if self.api_key.is_none() {
                    log::warn!("Gemini advisor selected without an API key");
                }
                Box::new(
                    GeminiAdvisor::new(self.api_key)
                        .with_model(self.model)
                        .with_endpoint(self.endpoint),
                )
            }
        }
    }
}
