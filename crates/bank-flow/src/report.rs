//! Run state and outcome reporting

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::steps::StepKind;

/// Terminal outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    Success,
    Failure,
}

/// Orchestrator state machine. Transitions are strictly linear; a step
/// failure routes directly to `Terminated(Failure)`, skipping later states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunState {
    Init,
    Registering,
    CreatingAccount,
    Transferring,
    LoggingOut,
    Terminated(RunStatus),
}

/// Outcome of a single step.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub step: StepKind,
    pub ok: bool,
    pub detail: Option<String>,
}

/// Aggregated outcome of one workflow run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub state: RunState,
    pub steps: Vec<StepRecord>,
    pub failure: Option<String>,
    pub diagnostic_written: bool,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            finished_at: None,
            state: RunState::Init,
            steps: Vec::new(),
            failure: None,
            diagnostic_written: false,
        }
    }

    /// Advance the state machine, logging the transition.
    pub fn transition(&mut self, state: RunState) {
        info!(from = ?self.state, to = ?state, "run state transition");
        self.state = state;
    }

    pub fn record_ok(&mut self, step: StepKind) {
        self.steps.push(StepRecord {
            step,
            ok: true,
            detail: None,
        });
    }

    pub fn record_failed(&mut self, step: StepKind, detail: impl Into<String>) {
        self.steps.push(StepRecord {
            step,
            ok: false,
            detail: Some(detail.into()),
        });
    }

    pub fn finish(&mut self, finished_at: DateTime<Utc>, status: RunStatus) {
        self.finished_at = Some(finished_at);
        self.transition(RunState::Terminated(status));
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Terminated(RunStatus::Success)
    }

    /// Whether a given step ran and succeeded.
    pub fn step_succeeded(&self, step: StepKind) -> bool {
        self.steps.iter().any(|record| record.step == step && record.ok)
    }

    /// Whether a given step was reached at all.
    pub fn step_attempted(&self, step: StepKind) -> bool {
        self.steps.iter().any(|record| record.step == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_tracks_terminal_state() {
        let mut report = RunReport::new(Utc::now());
        assert!(!report.is_success());
        report.transition(RunState::Registering);
        report.record_ok(StepKind::Register);
        report.finish(Utc::now(), RunStatus::Success);
        assert!(report.is_success());
        assert!(report.step_succeeded(StepKind::Register));
        assert!(!report.step_attempted(StepKind::TransferFunds));
    }
}
