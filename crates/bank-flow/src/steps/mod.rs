//! The four bounded workflow steps
//!
//! Each step is a finite sequence of interactions against one page. Steps
//! fail fast and report the sub-action that caused the failure; no step
//! inspects another step's internals.

pub mod logout;
pub mod open_account;
pub mod register;
pub mod transfer;

use serde::Serialize;
use std::fmt;

/// Identity of a workflow step, used in errors and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepKind {
    Register,
    OpenAccount,
    TransferFunds,
    Logout,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Register => "Register",
            StepKind::OpenAccount => "OpenAccount",
            StepKind::TransferFunds => "TransferFunds",
            StepKind::Logout => "Logout",
        };
        f.write_str(name)
    }
}
