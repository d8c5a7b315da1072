//! Gemini `generateContent` integration.
//!
//! Each request carries a system instruction, a single user prompt and a
//! `responseJsonSchema` generated from the payload types in
//! [`super::decode`]. Replies are decoded strictly; anything that does not
//! validate becomes an advisor error.

use std::time::Duration;

use async_trait::async_trait;
use jiff::Zoned;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{decode, Advisor, ProjectAnalysis, ScheduleEntry, SwapPlan};
use crate::{
    error::{Result, TrackerError},
    models::Site,
};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Public Generative Language API host.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const ANALYZE_INSTRUCTION: &str = "You are a world-class network deployment strategist for Ericsson. Analyze site data and provide actionable technical and logistics insights. Return only valid JSON.";
const SCHEDULE_INSTRUCTION: &str =
    "You are a logistics expert for telecom rollouts. Return valid JSON array.";
const SWAP_PLAN_INSTRUCTION: &str =
    "Senior Ericsson engineer creating MOP for equipment swaps. Return valid JSON.";

/// Advisor backed by the Gemini API.
pub struct GeminiAdvisor {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl GeminiAdvisor {
    /// Creates an advisor using the default model and endpoint.
    ///
    /// A missing key is not an error here; every call then fails with
    /// [`TrackerError::AdvisorUnavailable`].
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Use a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different API host, e.g. a proxy.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    /// Sends one prompt and returns the text of the first candidate.
    async fn generate(&self, instruction: &str, prompt: String, schema: Value) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            TrackerError::advisor("AI core offline: no Gemini API key configured (set GEMINI_API_KEY)")
        })?;

        let request = GenerateRequest::new(instruction, prompt, schema);
        log::debug!("Requesting {} from {}", self.model, self.endpoint);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TrackerError::advisor(format!(
                "Gemini API error ({status}): {body}"
            )));
        }

        let response: GenerateResponse = response.json().await?;
        let text = response.text();
        if text.trim().is_empty() {
            return Err(decode::SchemaViolation::EmptyResponse.into());
        }
        Ok(text)
    }
}

/// Summary of the inventory sent with analysis prompts.
pub(crate) fn analysis_prompt(sites: &[Site]) -> String {
    let summary: Vec<Value> = sites
        .iter()
        .map(|s| {
            json!({
                "id": s.id,
                "vendor": s.current_vendor.as_str(),
                "status": s.status.as_str(),
                "risk": s.risk_level.as_str(),
                "region": s.region,
            })
        })
        .collect();
    format!(
        "Analyze site swap project data for Ericsson/Globe Telecom. Provide strategic insights, risk mitigation, and priority sites. Data: {}",
        Value::Array(summary)
    )
}

/// Open sites and the schedule start date sent with schedule prompts.
pub(crate) fn schedule_prompt(open_sites: &[&Site], today: jiff::civil::Date) -> String {
    let summary: Vec<Value> = open_sites
        .iter()
        .map(|s| json!({ "id": s.id, "name": s.name, "region": s.region }))
        .collect();
    format!(
        "Create an optimized 4-week deployment schedule for these sites. Use ISO dates starting today ({today}). Sites: {}",
        Value::Array(summary)
    )
}

pub(crate) fn swap_plan_prompt(site: &Site) -> Result<String> {
    Ok(format!(
        "Create technical swap plan for site {}. Target: Ericsson. Equipment: {}.",
        site.id,
        serde_json::to_string(&site.equipment)?
    ))
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn analyze(&self, sites: &[Site]) -> Result<ProjectAnalysis> {
        let text = self
            .generate(
                ANALYZE_INSTRUCTION,
                analysis_prompt(sites),
                decode::analysis_schema(),
            )
            .await?;
        Ok(decode::decode_analysis(&text)?)
    }

    async fn schedule(&self, sites: &[Site]) -> Result<Vec<ScheduleEntry>> {
        let open: Vec<&Site> = sites.iter().filter(|s| !s.is_completed()).collect();
        if open.is_empty() {
            return Ok(Vec::new());
        }

        let text = self
            .generate(
                SCHEDULE_INSTRUCTION,
                schedule_prompt(&open, Zoned::now().date()),
                decode::schedule_schema(),
            )
            .await?;
        let requested: Vec<&str> = open.iter().map(|s| s.id.as_str()).collect();
        Ok(decode::decode_schedule(&text, &requested)?)
    }

    async fn swap_plan(&self, site: &Site) -> Result<SwapPlan> {
        let text = self
            .generate(
                SWAP_PLAN_INSTRUCTION,
                swap_plan_prompt(site)?,
                decode::swap_plan_schema(),
            )
            .await?;
        Ok(decode::decode_swap_plan(&text)?)
    }
}

// Request/Response types

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_json_schema: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn new(instruction: &str, prompt: String, schema: Value) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: instruction.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_json_schema: schema,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }
}
