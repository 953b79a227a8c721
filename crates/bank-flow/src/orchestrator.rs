//! Workflow orchestrator
//!
//! Owns the single session for the run's duration. Sequencing is strictly
//! linear; the first step failure triggers diagnostics and terminates the
//! run. Teardown executes on every exit path.

use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

use action_kit::DriverPort;

use crate::{
    config::FlowConfig,
    diagnostics,
    errors::FlowError,
    record::RegistrationRecord,
    report::{RunReport, RunState, RunStatus},
    steps::{self, StepKind},
};

pub struct Orchestrator {
    driver: Arc<dyn DriverPort>,
    config: FlowConfig,
}

impl Orchestrator {
    pub fn new(driver: Arc<dyn DriverPort>, config: FlowConfig) -> Self {
        Self { driver, config }
    }

    /// Run the full workflow: register, open an account, transfer funds,
    /// log out. Always returns a report; the session is closed before this
    /// returns, on success and on failure alike.
    pub async fn run(&self, record: &RegistrationRecord) -> RunReport {
        let mut report = RunReport::new(Utc::now());

        let outcome = self.drive(record, &mut report).await;

        if let Err(err) = &outcome {
            error!(error = %err, "workflow run failed");
            report.failure = Some(err.to_string());
            report.diagnostic_written = diagnostics::capture_failure_screenshot(
                self.driver.as_ref(),
                &self.config.screenshot_path,
            )
            .await;
        }

        // Guaranteed teardown. A failure here is tolerated and never
        // replaces the original outcome.
        if let Err(err) = self.driver.close().await {
            warn!(error = %err, "session teardown reported an error");
        }

        let status = if outcome.is_ok() {
            RunStatus::Success
        } else {
            RunStatus::Failure
        };
        report.finish(Utc::now(), status);
        report
    }

    async fn drive(
        &self,
        record: &RegistrationRecord,
        report: &mut RunReport,
    ) -> Result<(), FlowError> {
        let driver = self.driver.as_ref();

        info!(url = %self.config.entry_url, "navigating to the workflow entry page");
        driver
            .navigate(&self.config.entry_url)
            .await
            .map_err(|err| FlowError::Navigation {
                url: self.config.entry_url.clone(),
                reason: err.to_string(),
            })?;

        report.transition(RunState::Registering);
        self.step(report, StepKind::Register, steps::register::run(driver, &self.config, record))
            .await?;

        report.transition(RunState::CreatingAccount);
        self.step(report, StepKind::OpenAccount, steps::open_account::run(driver, &self.config))
            .await?;

        report.transition(RunState::Transferring);
        self.step(report, StepKind::TransferFunds, steps::transfer::run(driver, &self.config))
            .await?;

        // Logout is best-effort cleanup: its failure is recorded but never
        // overrides the run's prior success.
        report.transition(RunState::LoggingOut);
        match steps::logout::run(driver, &self.config).await {
            Ok(()) => report.record_ok(StepKind::Logout),
            Err(err) => {
                warn!(error = %err, "logout failed, prior outcome stands");
                report.record_failed(StepKind::Logout, err.to_string());
            }
        }

        Ok(())
    }

    async fn step(
        &self,
        report: &mut RunReport,
        kind: StepKind,
        fut: impl std::future::Future<Output = Result<(), FlowError>>,
    ) -> Result<(), FlowError> {
        match fut.await {
            Ok(()) => {
                info!(step = %kind, "step completed");
                report.record_ok(kind);
                Ok(())
            }
            Err(err) => {
                report.record_failed(kind, err.to_string());
                Err(err)
            }
        }
    }
}
