//! Failure diagnostics

use action_kit::DriverPort;
use std::path::Path;
use tracing::{info, warn};

/// Capture a screenshot of the current session state.
///
/// Runs only on the failure path and must never mask the original error:
/// a capture failure is logged and swallowed. Returns whether the artifact
/// was written.
pub async fn capture_failure_screenshot(driver: &dyn DriverPort, path: &Path) -> bool {
    match driver.capture_screenshot(path).await {
        Ok(()) => {
            info!(path = %path.display(), "failure screenshot saved");
            true
        }
        Err(err) => {
            warn!(error = %err, "could not save failure screenshot");
            false
        }
    }
}
