//! Strict decoding of model replies.
//!
//! Replies are parsed into payload structs that mirror the response schema
//! sent with each request (unknown fields rejected), then checked for the
//! constraints JSON schema cannot express. The same payload structs generate
//! that schema, so the two cannot drift apart.

use std::collections::HashSet;

use jiff::civil::Date;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{ProjectAnalysis, ScheduleEntry, SwapPlan};
use crate::models::SwapStep;

/// Reasons a model reply was rejected.
#[derive(Debug, Error)]
pub enum SchemaViolation {
    #[error("model returned an empty response")]
    EmptyResponse,
    #[error("response does not match the expected schema: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("field '{field}' {reason}")]
    InvalidField { field: String, reason: String },
}

impl SchemaViolation {
    fn field(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct AnalysisPayload {
    strategic_insights: Vec<String>,
    risk_mitigation: Vec<String>,
    priorities: Vec<String>,
    /// Percentage score, e.g. "85%"
    project_health: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct ScheduleItemPayload {
    site_id: String,
    /// ISO 8601 calendar date, e.g. "2025-03-14"
    scheduled_date: String,
    rationale: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct SwapStepPayload {
    task: String,
    estimated_duration: String,
    safety_precaution: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct SwapPlanPayload {
    steps: Vec<SwapStepPayload>,
    critical_alerts: Vec<String>,
}

/// JSON schema sent as `responseJsonSchema` for analysis requests.
pub(crate) fn analysis_schema() -> Value {
    response_schema(schemars::schema_for!(AnalysisPayload))
}

/// JSON schema sent as `responseJsonSchema` for schedule requests.
pub(crate) fn schedule_schema() -> Value {
    response_schema(schemars::schema_for!(Vec<ScheduleItemPayload>))
}

/// JSON schema sent as `responseJsonSchema` for swap plan requests.
pub(crate) fn swap_plan_schema() -> Value {
    response_schema(schemars::schema_for!(SwapPlanPayload))
}

fn response_schema(schema: schemars::Schema) -> Value {
    let mut value = schema.as_value().clone();
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
    }
    value
}

/// Removes markdown code fences models sometimes wrap JSON in.
pub fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn parse<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T, SchemaViolation> {
    let clean = strip_fences(text);
    if clean.is_empty() {
        return Err(SchemaViolation::EmptyResponse);
    }
    Ok(serde_json::from_str(&clean)?)
}

fn non_blank(field: &str, value: String) -> Result<String, SchemaViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(SchemaViolation::field(field, "must not be blank"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn non_blank_all(field: &str, values: Vec<String>) -> Result<Vec<String>, SchemaViolation> {
    values.into_iter().map(|v| non_blank(field, v)).collect()
}

/// Decodes a project analysis reply.
///
/// # Examples
///
/// ```rust
/// use swaptrack_core::advisor::decode::decode_analysis;
///
/// let reply = r#"```json
/// {"strategicInsights": ["On track"], "riskMitigation": ["Stage spares"],
///  "priorities": ["Site PH-G-0001"], "projectHealth": "85%"}
/// ```"#;
/// let analysis = decode_analysis(reply).unwrap();
/// assert_eq!(analysis.health_score(), Some(85));
/// ```
pub fn decode_analysis(text: &str) -> Result<ProjectAnalysis, SchemaViolation> {
    let payload: AnalysisPayload = parse(text)?;

    let health = payload
        .project_health
        .trim()
        .strip_suffix('%')
        .and_then(|n| n.trim().parse::<u8>().ok())
        .filter(|n| *n <= 100)
        .ok_or_else(|| {
            SchemaViolation::field("projectHealth", "must be a percentage such as \"85%\"")
        })?;

    let insights = non_blank_all("strategicInsights", payload.strategic_insights)?;
    if insights.is_empty() {
        return Err(SchemaViolation::field(
            "strategicInsights",
            "must contain at least one insight",
        ));
    }

    Ok(ProjectAnalysis {
        insights,
        risks: non_blank_all("riskMitigation", payload.risk_mitigation)?,
        priorities: non_blank_all("priorities", payload.priorities)?,
        health_percent: format!("{health}%"),
    })
}

/// Decodes a schedule reply, accepting only entries for `requested` sites.
pub fn decode_schedule(
    text: &str,
    requested: &[&str],
) -> Result<Vec<ScheduleEntry>, SchemaViolation> {
    let payload: Vec<ScheduleItemPayload> = parse(text)?;
    let requested: HashSet<&str> = requested.iter().copied().collect();
    let mut seen = HashSet::new();

    payload
        .into_iter()
        .map(|item| {
            let site_id = non_blank("siteId", item.site_id)?;
            if !requested.contains(site_id.as_str()) {
                return Err(SchemaViolation::field(
                    "siteId",
                    format!("refers to unknown or completed site {site_id}"),
                ));
            }
            if !seen.insert(site_id.clone()) {
                return Err(SchemaViolation::field(
                    "siteId",
                    format!("schedules site {site_id} more than once"),
                ));
            }
            let scheduled_date = item.scheduled_date.trim().parse::<Date>().map_err(|_| {
                SchemaViolation::field(
                    "scheduledDate",
                    format!("'{}' is not an ISO date", item.scheduled_date),
                )
            })?;
            Ok(ScheduleEntry {
                site_id,
                scheduled_date,
                rationale: non_blank("rationale", item.rationale)?,
            })
        })
        .collect()
}

/// Decodes a swap plan reply.
pub fn decode_swap_plan(text: &str) -> Result<SwapPlan, SchemaViolation> {
    let payload: SwapPlanPayload = parse(text)?;
    if payload.steps.is_empty() {
        return Err(SchemaViolation::field("steps", "must contain at least one step"));
    }

    let steps = payload
        .steps
        .into_iter()
        .map(|step| {
            Ok(SwapStep {
                task: non_blank("steps.task", step.task)?,
                duration: non_blank("steps.estimatedDuration", step.estimated_duration)?,
                precaution: non_blank("steps.safetyPrecaution", step.safety_precaution)?,
            })
        })
        .collect::<Result<Vec<_>, SchemaViolation>>()?;

    Ok(SwapPlan {
        steps,
        alerts: non_blank_all("criticalAlerts", payload.critical_alerts)?,
    })
}
