//! Interaction primitives with bounded retry
//!
//! UI readiness is not deterministically signaled by the page, so clicks
//! run under a bounded retry with a short settle pause; text fields are
//! assumed stable once present and get a single attempt.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{
    errors::DriverError,
    locator::Locator,
    port::DriverPort,
    wait::{wait_for_clickable, wait_for_present, DEFAULT_POLL},
};

/// Retry behavior for click interactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of click attempts
    pub max_attempts: u32,

    /// Per-attempt wait for the element to become clickable
    pub timeout: Duration,

    /// Fixed delay between failed attempts
    pub backoff: Duration,

    /// Pause after scrolling, before the click, to let layout settle
    pub settle: Duration,

    /// Interval between condition probes inside a wait
    pub poll: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            timeout: Duration::from_secs(10),
            backoff: Duration::from_secs(2),
            settle: Duration::from_secs(1),
            poll: DEFAULT_POLL,
        }
    }
}

/// Click the element once it becomes clickable, retrying on failure.
///
/// Each attempt waits for clickability within the policy timeout, scrolls
/// the element into view, pauses for layout to settle, then clicks.
/// Failures are logged with the attempt number and followed by the policy
/// backoff; only after every attempt has failed is the last error returned.
/// A non-retryable error aborts the loop immediately.
pub async fn click_with_retry(
    driver: &dyn DriverPort,
    locator: &Locator,
    policy: &RetryPolicy,
) -> Result<(), DriverError> {
    let mut last_error = DriverError::Timeout(format!("{locator} never became clickable"));

    for attempt in 1..=policy.max_attempts.max(1) {
        match click_once(driver, locator, policy).await {
            Ok(()) => {
                info!(target = %locator, attempt, "click succeeded");
                return Ok(());
            }
            Err(err) => {
                warn!(target = %locator, attempt, error = %err, "click attempt failed");
                if !err.is_retryable() {
                    return Err(err);
                }
                last_error = err;
                if attempt < policy.max_attempts {
                    sleep(policy.backoff).await;
                }
            }
        }
    }

    Err(last_error)
}

async fn click_once(
    driver: &dyn DriverPort,
    locator: &Locator,
    policy: &RetryPolicy,
) -> Result<(), DriverError> {
    wait_for_clickable(driver, locator, policy.timeout, policy.poll).await?;
    driver.scroll_into_view(locator).await?;
    if !policy.settle.is_zero() {
        sleep(policy.settle).await;
    }
    driver.click(locator).await
}

/// Wait for the field to be present, clear it, then insert `text`.
///
/// Single attempt: unlike clicks, a text field that is present is assumed
/// stable. Re-entry is idempotent — a second call leaves only its own value.
pub async fn type_into_field(
    driver: &dyn DriverPort,
    locator: &Locator,
    text: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<(), DriverError> {
    wait_for_present(driver, locator, timeout, poll).await?;
    driver.clear_and_type(locator, text).await?;
    debug!(target = %locator, chars = text.len(), "field filled");
    Ok(())
}

/// Select the option at `index` if the dropdown has one there.
///
/// Returns `Ok(true)` when a selection was made and `Ok(false)` when the
/// dropdown has too few options — which is not a failure: dropdowns can
/// legitimately start under-populated (a brand-new customer has no source
/// account yet).
pub async fn select_nth_option(
    driver: &dyn DriverPort,
    locator: &Locator,
    index: usize,
) -> Result<bool, DriverError> {
    let labels = driver.option_labels(locator).await?;
    if labels.len() > index {
        driver.select_by_index(locator, index).await?;
        info!(target = %locator, index, total = labels.len(), "option selected");
        Ok(true)
    } else {
        info!(
            target = %locator,
            index,
            total = labels.len(),
            "dropdown has too few options, skipping selection"
        );
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;

    /// Scripted driver: clickability per locator, click failures to burn
    /// through, recorded interactions.
    #[derive(Default)]
    struct ScriptedDriver {
        clickable: Mutex<HashMap<String, bool>>,
        present: Mutex<HashMap<String, bool>>,
        click_failures: Mutex<u32>,
        fail_kind: Mutex<Option<DriverError>>,
        clicks: Mutex<Vec<String>>,
        fields: Mutex<HashMap<String, String>>,
        options: Mutex<HashMap<String, Vec<String>>>,
        selected: Mutex<HashMap<String, usize>>,
    }

    impl ScriptedDriver {
        fn clickable(self, locator: &Locator) -> Self {
            self.clickable
                .lock()
                .unwrap()
                .insert(locator.to_string(), true);
            self.present
                .lock()
                .unwrap()
                .insert(locator.to_string(), true);
            self
        }

        fn present(self, locator: &Locator) -> Self {
            self.present
                .lock()
                .unwrap()
                .insert(locator.to_string(), true);
            self
        }

        fn failing_clicks(self, count: u32, kind: DriverError) -> Self {
            *self.click_failures.lock().unwrap() = count;
            *self.fail_kind.lock().unwrap() = Some(kind);
            self
        }

        fn with_options(self, locator: &Locator, labels: &[&str]) -> Self {
            self.options.lock().unwrap().insert(
                locator.to_string(),
                labels.iter().map(|l| l.to_string()).collect(),
            );
            self.present
                .lock()
                .unwrap()
                .insert(locator.to_string(), true);
            self
        }

        fn click_count(&self) -> usize {
            self.clicks.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl DriverPort for ScriptedDriver {
        async fn exists(&self, locator: &Locator) -> Result<bool, DriverError> {
            Ok(*self
                .present
                .lock()
                .unwrap()
                .get(&locator.to_string())
                .unwrap_or(&false))
        }

        async fn is_visible(&self, locator: &Locator) -> Result<bool, DriverError> {
            self.is_clickable(locator).await
        }

        async fn is_clickable(&self, locator: &Locator) -> Result<bool, DriverError> {
            Ok(*self
                .clickable
                .lock()
                .unwrap()
                .get(&locator.to_string())
                .unwrap_or(&false))
        }

        async fn scroll_into_view(&self, _locator: &Locator) -> Result<(), DriverError> {
            Ok(())
        }

        async fn click(&self, locator: &Locator) -> Result<(), DriverError> {
            let mut failures = self.click_failures.lock().unwrap();
            self.clicks.lock().unwrap().push(locator.to_string());
            if *failures > 0 {
                *failures -= 1;
                let kind = self.fail_kind.lock().unwrap();
                return Err(kind
                    .clone()
                    .unwrap_or(DriverError::NotInteractable("scripted".into())));
            }
            Ok(())
        }

        async fn clear_and_type(&self, locator: &Locator, text: &str) -> Result<(), DriverError> {
            // clear-then-insert: any prior value is replaced wholesale
            self.fields
                .lock()
                .unwrap()
                .insert(locator.to_string(), text.to_string());
            Ok(())
        }

        async fn option_labels(&self, locator: &Locator) -> Result<Vec<String>, DriverError> {
            Ok(self
                .options
                .lock()
                .unwrap()
                .get(&locator.to_string())
                .cloned()
                .unwrap_or_default())
        }

        async fn select_by_index(
            &self,
            locator: &Locator,
            index: usize,
        ) -> Result<(), DriverError> {
            self.selected
                .lock()
                .unwrap()
                .insert(locator.to_string(), index);
            Ok(())
        }

        async fn select_by_label(&self, _locator: &Locator, _label: &str) -> Result<(), DriverError> {
            Ok(())
        }

        async fn page_contains_text(&self, _needle: &str) -> Result<bool, DriverError> {
            Ok(false)
        }

        async fn navigate(&self, _url: &str) -> Result<(), DriverError> {
            Ok(())
        }

        async fn capture_screenshot(&self, _path: &Path) -> Result<(), DriverError> {
            Ok(())
        }

        async fn close(&self) -> Result<(), DriverError> {
            Ok(())
        }
    }

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            timeout: Duration::from_millis(20),
            backoff: Duration::from_millis(1),
            settle: Duration::ZERO,
            poll: Duration::from_millis(1),
        }
    }

    #[test]
    fn default_policy_matches_contract() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.timeout, Duration::from_secs(10));
        assert_eq!(policy.backoff, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn click_succeeds_first_attempt() {
        let link = Locator::link_text("Register");
        let driver = ScriptedDriver::default().clickable(&link);
        click_with_retry(&driver, &link, &fast_policy(3))
            .await
            .unwrap();
        assert_eq!(driver.click_count(), 1);
    }

    #[tokio::test]
    async fn click_retries_then_succeeds() {
        let link = Locator::link_text("Register");
        let driver = ScriptedDriver::default()
            .clickable(&link)
            .failing_clicks(2, DriverError::NotInteractable("intercepted".into()));
        click_with_retry(&driver, &link, &fast_policy(3))
            .await
            .unwrap();
        assert_eq!(driver.click_count(), 3);
    }

    #[tokio::test]
    async fn click_clicks_at_most_max_attempts_times() {
        let link = Locator::link_text("Register");
        let driver = ScriptedDriver::default()
            .clickable(&link)
            .failing_clicks(10, DriverError::NotInteractable("intercepted".into()));
        let result = click_with_retry(&driver, &link, &fast_policy(3)).await;
        assert!(result.is_err());
        assert_eq!(driver.click_count(), 3);
    }

    #[tokio::test]
    async fn click_never_clickable_fails_after_all_attempts() {
        let link = Locator::link_text("Open New Account");
        let driver = ScriptedDriver::default();
        let result = click_with_retry(&driver, &link, &fast_policy(3)).await;
        assert!(matches!(result, Err(DriverError::Timeout(_))));
        // never clickable, so the underlying click is never reached
        assert_eq!(driver.click_count(), 0);
    }

    #[tokio::test]
    async fn click_aborts_on_non_retryable_error() {
        let link = Locator::link_text("Register");
        let driver = ScriptedDriver::default()
            .clickable(&link)
            .failing_clicks(10, DriverError::UnexpectedState("wrong page".into()));
        let result = click_with_retry(&driver, &link, &fast_policy(3)).await;
        assert!(matches!(result, Err(DriverError::UnexpectedState(_))));
        assert_eq!(driver.click_count(), 1);
    }

    #[tokio::test]
    async fn type_replaces_prior_value() {
        let field = Locator::id("amount");
        let driver = ScriptedDriver::default().present(&field);
        let timeout = Duration::from_millis(20);
        let poll = Duration::from_millis(1);
        type_into_field(&driver, &field, "50", timeout, poll)
            .await
            .unwrap();
        type_into_field(&driver, &field, "100", timeout, poll)
            .await
            .unwrap();
        assert_eq!(
            driver.fields.lock().unwrap().get(&field.to_string()),
            Some(&"100".to_string())
        );
    }

    #[tokio::test]
    async fn type_fails_when_field_absent() {
        let field = Locator::id("amount");
        let driver = ScriptedDriver::default();
        let result = type_into_field(
            &driver,
            &field,
            "100",
            Duration::from_millis(10),
            Duration::from_millis(1),
        )
        .await;
        assert!(matches!(result, Err(DriverError::Timeout(_))));
    }

    #[tokio::test]
    async fn select_nth_picks_index_when_available() {
        let dropdown = Locator::id("toAccountId");
        let driver = ScriptedDriver::default().with_options(&dropdown, &["111", "222"]);
        assert!(select_nth_option(&driver, &dropdown, 1).await.unwrap());
        assert_eq!(
            driver.selected.lock().unwrap().get(&dropdown.to_string()),
            Some(&1)
        );
    }

    #[tokio::test]
    async fn select_nth_skips_when_too_few_options() {
        let dropdown = Locator::id("toAccountId");
        let driver = ScriptedDriver::default().with_options(&dropdown, &["111"]);
        assert!(!select_nth_option(&driver, &dropdown, 1).await.unwrap());
        assert!(driver.selected.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn select_nth_skips_empty_dropdown() {
        let dropdown = Locator::id("fromAccountId");
        let driver = ScriptedDriver::default().with_options(&dropdown, &[]);
        assert!(!select_nth_option(&driver, &dropdown, 0).await.unwrap());
    }
}
