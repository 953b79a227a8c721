//! Logout step: best-effort session cleanup, never a workflow objective

use action_kit::{click_with_retry, DriverPort, Locator};
use tracing::info;

use crate::{config::FlowConfig, errors::FlowError, steps::StepKind};

pub async fn run(driver: &dyn DriverPort, config: &FlowConfig) -> Result<(), FlowError> {
    info!("logging out");

    let entry = Locator::link_text("Log Out");
    click_with_retry(driver, &entry, &config.retry)
        .await
        .map_err(|err| FlowError::step(StepKind::Logout, format!("could not click 'Log Out': {err}")))?;

    info!("logged out");
    Ok(())
}
