//! Command-line interface
//!
//! Workflow constants (transfer amount, destination index, timeouts) are
//! exposed as flags with the historical literals as defaults.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use action_kit::RetryPolicy;
use bank_flow::{FlowConfig, DEFAULT_ENTRY_URL};
use session_adapter::SessionConfig;

#[derive(Debug, Parser)]
#[command(
    name = "bankflow",
    version,
    about = "Drive the demo-bank registration, account-opening, and transfer workflow"
)]
pub struct Cli {
    /// Workflow entry page
    #[arg(long, default_value = DEFAULT_ENTRY_URL)]
    pub url: String,

    /// Run the browser without a visible window
    #[arg(long)]
    pub headless: bool,

    /// Browser executable path; resolved from the environment when unset
    #[arg(long)]
    pub chrome: Option<PathBuf>,

    /// Amount entered into the transfer form
    #[arg(long, default_value = "100")]
    pub amount: String,

    /// Destination dropdown index for the transfer
    #[arg(long, default_value_t = 1)]
    pub destination_index: usize,

    /// Account type chosen when opening the new account
    #[arg(long, default_value = "SAVINGS")]
    pub account_type: String,

    /// Where the failure screenshot is written
    #[arg(long, default_value = "error_screenshot.png")]
    pub screenshot: PathBuf,

    /// Click attempts per entry/submit control
    #[arg(long, default_value_t = 3)]
    pub click_retries: u32,

    /// Per-attempt wait for an element to become clickable
    #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
    pub click_timeout: Duration,

    /// Delay between failed click attempts
    #[arg(long, default_value = "2s", value_parser = humantime::parse_duration)]
    pub backoff: Duration,

    /// Wait for a confirmation marker after a submit
    #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
    pub confirm_timeout: Duration,
}

impl Cli {
    pub fn flow_config(&self) -> FlowConfig {
        let mut config = FlowConfig::default()
            .with_entry_url(self.url.clone())
            .with_transfer_amount(self.amount.clone())
            .with_destination_index(self.destination_index)
            .with_screenshot_path(self.screenshot.clone())
            .with_retry(RetryPolicy {
                max_attempts: self.click_retries,
                timeout: self.click_timeout,
                backoff: self.backoff,
                ..RetryPolicy::default()
            });
        config.account_type = self.account_type.clone();
        config.confirm_timeout = self.confirm_timeout;
        config
    }

    pub fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default().with_headless(self.headless);
        if let Some(path) = &self.chrome {
            config = config.with_executable(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_workflow_constants() {
        let cli = Cli::parse_from(["bankflow"]);
        let flow = cli.flow_config();
        assert_eq!(flow.entry_url, DEFAULT_ENTRY_URL);
        assert_eq!(flow.transfer_amount, "100");
        assert_eq!(flow.destination_index, 1);
        assert_eq!(flow.account_type, "SAVINGS");
        assert_eq!(flow.retry.max_attempts, 3);
        assert_eq!(flow.retry.timeout, Duration::from_secs(10));
        assert_eq!(flow.retry.backoff, Duration::from_secs(2));
        assert!(!cli.session_config().headless);
    }

    #[test]
    fn durations_parse_humantime_syntax() {
        let cli = Cli::parse_from([
            "bankflow",
            "--click-timeout",
            "500ms",
            "--backoff",
            "1s",
            "--confirm-timeout",
            "2m",
        ]);
        let flow = cli.flow_config();
        assert_eq!(flow.retry.timeout, Duration::from_millis(500));
        assert_eq!(flow.retry.backoff, Duration::from_secs(1));
        assert_eq!(flow.confirm_timeout, Duration::from_secs(120));
    }

    #[test]
    fn overrides_flow_through() {
        let cli = Cli::parse_from([
            "bankflow",
            "--amount",
            "250",
            "--destination-index",
            "0",
            "--headless",
            "--chrome",
            "/usr/bin/chromium",
        ]);
        let flow = cli.flow_config();
        assert_eq!(flow.transfer_amount, "250");
        assert_eq!(flow.destination_index, 0);
        let session = cli.session_config();
        assert!(session.headless);
        assert_eq!(
            session.executable.as_deref(),
            Some(std::path::Path::new("/usr/bin/chromium"))
        );
    }
}
