//! Bounded polling waits
//!
//! The driven application exposes no explicit "ready" signals, so every
//! wait is a poll-until-condition loop bounded by a deadline.

use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::trace;

use crate::{errors::DriverError, locator::Locator, port::DriverPort};

/// Default interval between condition probes.
pub const DEFAULT_POLL: Duration = Duration::from_millis(250);

/// Poll `probe` until it reports true or `timeout` expires.
///
/// The probe runs at least once even with a zero timeout, so conditions
/// that already hold never fail spuriously.
pub async fn wait_until<F, Fut>(
    what: &str,
    timeout: Duration,
    poll: Duration,
    mut probe: F,
) -> Result<(), DriverError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, DriverError>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if probe().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(DriverError::Timeout(format!(
                "condition '{what}' not met within {}ms",
                timeout.as_millis()
            )));
        }
        trace!(condition = what, "condition not met yet, polling again");
        sleep(poll).await;
    }
}

/// Wait until an element matching `locator` is present in the DOM.
pub async fn wait_for_present(
    driver: &dyn DriverPort,
    locator: &Locator,
    timeout: Duration,
    poll: Duration,
) -> Result<(), DriverError> {
    let what = format!("{locator} present");
    wait_until(&what, timeout, poll, || {
        let target = locator.clone();
        async move { driver.exists(&target).await }
    })
    .await
}

/// Wait until the element is present, visible, and enabled.
pub async fn wait_for_clickable(
    driver: &dyn DriverPort,
    locator: &Locator,
    timeout: Duration,
    poll: Duration,
) -> Result<(), DriverError> {
    let what = format!("{locator} clickable");
    wait_until(&what, timeout, poll, || {
        let target = locator.clone();
        async move { driver.is_clickable(&target).await }
    })
    .await
}

/// Wait until the rendered page text contains `needle`.
///
/// Used for confirmation markers such as "Account Opened!".
pub async fn wait_for_text(
    driver: &dyn DriverPort,
    needle: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<(), DriverError> {
    let what = format!("page text contains '{needle}'");
    wait_until(&what, timeout, poll, || {
        let text = needle.to_string();
        async move { driver.page_contains_text(&text).await }
    })
    .await
}
