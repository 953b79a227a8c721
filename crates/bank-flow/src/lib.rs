//! Linear banking workflow over a browser session
//!
//! Four bounded steps — Register, OpenAccount, TransferFunds, Logout —
//! sequenced by an orchestrator that owns the session, fails fast on the
//! first step failure, captures a diagnostic screenshot, and guarantees
//! teardown on every exit path.

mod config;
mod diagnostics;
pub mod errors;
mod orchestrator;
mod record;
mod report;
pub mod steps;

pub use config::*;
pub use diagnostics::*;
pub use errors::*;
pub use orchestrator::*;
pub use record::*;
pub use report::*;
