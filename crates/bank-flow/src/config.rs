//! Workflow configuration
//!
//! Values that were literals in earlier renditions of this workflow
//! (transfer amount, destination index, confirmation timeouts) are
//! explicit configuration with those literals as defaults.

use action_kit::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default landing page of the driven application.
pub const DEFAULT_ENTRY_URL: &str = "https://parabank.parasoft.com/parabank/index.htm";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Landing page the session navigates to on start
    pub entry_url: String,

    /// Account type chosen when opening the new account
    pub account_type: String,

    /// Amount entered into the transfer form
    pub transfer_amount: String,

    /// Destination dropdown index, skipped when too few options exist.
    /// Index 1 avoids transferring to the account the form preselects
    /// as the source.
    pub destination_index: usize,

    /// Where the failure screenshot is written, overwritten per run
    pub screenshot_path: PathBuf,

    /// Retry behavior for every entry/submit click
    pub retry: RetryPolicy,

    /// Wait for a form field to become present
    pub field_timeout: Duration,

    /// Wait for a confirmation marker after submitting
    pub confirm_timeout: Duration,

    /// Bound on form readiness polls that replace fixed settle sleeps
    pub form_settle: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            entry_url: DEFAULT_ENTRY_URL.to_string(),
            account_type: "SAVINGS".to_string(),
            transfer_amount: "100".to_string(),
            destination_index: 1,
            screenshot_path: PathBuf::from("error_screenshot.png"),
            retry: RetryPolicy::default(),
            field_timeout: Duration::from_secs(10),
            confirm_timeout: Duration::from_secs(10),
            form_settle: Duration::from_secs(5),
        }
    }
}

impl FlowConfig {
    pub fn with_entry_url(mut self, url: impl Into<String>) -> Self {
        self.entry_url = url.into();
        self
    }

    pub fn with_transfer_amount(mut self, amount: impl Into<String>) -> Self {
        self.transfer_amount = amount.into();
        self
    }

    pub fn with_destination_index(mut self, index: usize) -> Self {
        self.destination_index = index;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_screenshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshot_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_workflow_constants() {
        let config = FlowConfig::default();
        assert_eq!(config.transfer_amount, "100");
        assert_eq!(config.destination_index, 1);
        assert_eq!(config.account_type, "SAVINGS");
        assert_eq!(config.screenshot_path, PathBuf::from("error_screenshot.png"));
    }
}
