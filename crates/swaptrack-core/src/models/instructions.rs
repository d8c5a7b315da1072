//! Method-of-procedure instructions generated for a site swap.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One step of a swap procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapStep {
    /// Work to perform
    pub task: String,

    /// Estimated duration, free-form (e.g. `2h`)
    pub duration: String,

    /// Safety precaution to observe while performing the step
    pub precaution: String,
}

/// Swap procedure stored on a site once generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechnicalInstructions {
    pub steps: Vec<SwapStep>,
    pub alerts: Vec<String>,
    pub generated_at: Timestamp,
}
