//! OpenAccount step
//!
//! AwaitDashboard → ClickEntry → SelectType → SelectSource → Submit →
//! AwaitConfirmation. The source dropdown can legitimately be empty for a
//! brand-new customer, so an empty dropdown is logged and skipped, not a
//! failure.

use action_kit::{
    click_with_retry, select_nth_option, wait_for_present, wait_for_text, wait_until, DriverPort,
    Locator,
};
use tracing::{debug, info, warn};

use crate::{config::FlowConfig, errors::FlowError, steps::StepKind};

/// Confirmation marker shown once the account exists.
pub const CONFIRMATION_MARKER: &str = "Account Opened!";

const SOURCE_ACCOUNT_INDEX: usize = 0;

pub async fn run(driver: &dyn DriverPort, config: &FlowConfig) -> Result<(), FlowError> {
    info!("starting account creation");

    // The dashboard exposes no completion signal; poll for the entry link
    // instead of sleeping a fixed interval. A miss is not fatal here, the
    // retried click below gets its own wait.
    let entry = Locator::link_text("Open New Account");
    if let Err(err) = wait_for_present(driver, &entry, config.form_settle, config.retry.poll).await
    {
        debug!(error = %err, "dashboard entry link not present yet, deferring to the retried click");
    }

    click_with_retry(driver, &entry, &config.retry)
        .await
        .map_err(|err| fail(format!("could not click 'Open New Account': {err}")))?;

    let account_type = Locator::id("type");
    wait_for_present(driver, &account_type, config.field_timeout, config.retry.poll)
        .await
        .map_err(|err| fail(format!("account type selector missing: {err}")))?;
    driver
        .select_by_label(&account_type, &config.account_type)
        .await
        .map_err(|err| {
            fail(format!(
                "could not select account type '{}': {err}",
                config.account_type
            ))
        })?;
    info!(account_type = %config.account_type, "account type selected");

    // Choosing a type repopulates the source dropdown without any ready
    // signal. Poll until options appear, bounded; an empty dropdown after
    // the bound is still acceptable.
    let source = Locator::id("fromAccountId");
    wait_for_present(driver, &source, config.field_timeout, config.retry.poll)
        .await
        .map_err(|err| fail(format!("source account selector missing: {err}")))?;
    let populated = wait_until(
        "source account options",
        config.form_settle,
        config.retry.poll,
        || {
            let dropdown = source.clone();
            async move { Ok(!driver.option_labels(&dropdown).await?.is_empty()) }
        },
    )
    .await;
    if populated.is_err() {
        warn!("source account dropdown did not populate within the bound");
    }

    let selected = select_nth_option(driver, &source, SOURCE_ACCOUNT_INDEX)
        .await
        .map_err(|err| fail(format!("source account selection failed: {err}")))?;
    if !selected {
        info!("no accounts available in the source dropdown, proceeding without selection");
    }

    let submit = Locator::input_value("Open New Account");
    click_with_retry(driver, &submit, &config.retry)
        .await
        .map_err(|err| fail(format!("could not submit the new account form: {err}")))?;

    wait_for_text(driver, CONFIRMATION_MARKER, config.confirm_timeout, config.retry.poll)
        .await
        .map_err(|err| fail(format!("confirmation '{CONFIRMATION_MARKER}' not seen: {err}")))?;

    info!("account created");
    Ok(())
}

fn fail(reason: String) -> FlowError {
    FlowError::step(StepKind::OpenAccount, reason)
}
