//! TransferFunds step
//!
//! ClickEntry → SelectDestination → EnterAmount → Submit →
//! AwaitConfirmation. The destination dropdown contents are enumerated and
//! logged before selection; a single-account dropdown skips selection and
//! continues.

use action_kit::{
    click_with_retry, type_into_field, wait_for_present, wait_for_text, DriverPort, Locator,
};
use tracing::info;

use crate::{config::FlowConfig, errors::FlowError, steps::StepKind};

/// Confirmation marker shown once the transfer is booked.
pub const CONFIRMATION_MARKER: &str = "Transfer Complete!";

pub async fn run(driver: &dyn DriverPort, config: &FlowConfig) -> Result<(), FlowError> {
    info!("starting funds transfer");

    let entry = Locator::link_text("Transfer Funds");
    click_with_retry(driver, &entry, &config.retry)
        .await
        .map_err(|err| fail(format!("could not click 'Transfer Funds': {err}")))?;

    // Form readiness: the amount field appearing stands in for the missing
    // load signal.
    let amount = Locator::id("amount");
    wait_for_present(driver, &amount, config.form_settle, config.retry.poll)
        .await
        .map_err(|err| fail(format!("transfer form did not appear: {err}")))?;

    let destination = Locator::id("toAccountId");
    wait_for_present(driver, &destination, config.field_timeout, config.retry.poll)
        .await
        .map_err(|err| fail(format!("destination account selector missing: {err}")))?;

    let labels = driver
        .option_labels(&destination)
        .await
        .map_err(|err| fail(format!("could not read destination accounts: {err}")))?;
    info!(count = labels.len(), "destination account options");
    for label in &labels {
        info!(option = %label, "destination account");
    }

    if labels.len() > config.destination_index {
        driver
            .select_by_index(&destination, config.destination_index)
            .await
            .map_err(|err| fail(format!("destination account selection failed: {err}")))?;
        info!(index = config.destination_index, "destination account selected");
    } else {
        info!("only one account available, keeping the default destination");
    }

    type_into_field(
        driver,
        &amount,
        &config.transfer_amount,
        config.field_timeout,
        config.retry.poll,
    )
    .await
    .map_err(|err| fail(format!("could not enter the transfer amount: {err}")))?;
    info!(amount = %config.transfer_amount, "transfer amount entered");

    let submit = Locator::input_value("Transfer");
    click_with_retry(driver, &submit, &config.retry)
        .await
        .map_err(|err| fail(format!("could not submit the transfer: {err}")))?;

    wait_for_text(driver, CONFIRMATION_MARKER, config.confirm_timeout, config.retry.poll)
        .await
        .map_err(|err| fail(format!("confirmation '{CONFIRMATION_MARKER}' not seen: {err}")))?;

    info!("transfer completed");
    Ok(())
}

fn fail(reason: String) -> FlowError {
    FlowError::step(StepKind::TransferFunds, reason)
}
