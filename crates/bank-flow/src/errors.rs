//! Workflow error types

use thiserror::Error;

use crate::steps::StepKind;

/// Failures escaping step execution. Every one is fatal to the remainder
/// of the run; there is no partial-step resumption or compensation.
#[derive(Debug, Error, Clone)]
pub enum FlowError {
    /// The session could not reach the workflow entry page
    #[error("navigation to '{url}' failed: {reason}")]
    Navigation { url: String, reason: String },

    /// A step exhausted its retries or missed an expected post-condition
    #[error("step {step} failed: {reason}")]
    StepFailed { step: StepKind, reason: String },
}

impl FlowError {
    pub fn step(step: StepKind, reason: impl Into<String>) -> Self {
        FlowError::StepFailed {
            step,
            reason: reason.into(),
        }
    }
}
