//! Register step: entry click, form fill, password confirmation, submit

use action_kit::{click_with_retry, type_into_field, DriverPort, Locator};
use tracing::info;

use crate::{
    config::FlowConfig,
    errors::FlowError,
    record::{RegistrationRecord, REPEATED_PASSWORD_FIELD},
    steps::StepKind,
};

pub async fn run(
    driver: &dyn DriverPort,
    config: &FlowConfig,
    record: &RegistrationRecord,
) -> Result<(), FlowError> {
    info!("starting registration");

    let entry = Locator::link_text("Register");
    click_with_retry(driver, &entry, &config.retry)
        .await
        .map_err(|err| fail(format!("could not open the registration form: {err}")))?;

    for (field, value) in record.fields() {
        fill(driver, config, field, value).await?;
    }
    fill(driver, config, REPEATED_PASSWORD_FIELD, &record.password).await?;

    let submit = Locator::input_value("Register");
    click_with_retry(driver, &submit, &config.retry)
        .await
        .map_err(|err| fail(format!("could not submit the registration form: {err}")))?;

    info!("registration submitted");
    Ok(())
}

async fn fill(
    driver: &dyn DriverPort,
    config: &FlowConfig,
    field: &str,
    value: &str,
) -> Result<(), FlowError> {
    let locator = Locator::id(field);
    type_into_field(
        driver,
        &locator,
        value,
        config.field_timeout,
        config.retry.poll,
    )
    .await
    .map_err(|err| fail(format!("could not fill field '{field}': {err}")))
}

fn fail(reason: String) -> FlowError {
    FlowError::step(StepKind::Register, reason)
}
