//! The abstract browser capability consumed by primitives and steps

use async_trait::async_trait;
use std::path::Path;

use crate::{errors::DriverError, locator::Locator};

/// Locate / inspect / act capability over one live browser session.
///
/// Everything above this trait is browser-agnostic; the production
/// implementation speaks CDP, tests substitute scripted fakes.
#[async_trait]
pub trait DriverPort: Send + Sync {
    /// Whether any element matches the locator.
    async fn exists(&self, locator: &Locator) -> Result<bool, DriverError>;

    /// Whether the element is rendered and visible.
    async fn is_visible(&self, locator: &Locator) -> Result<bool, DriverError>;

    /// Whether the element is visible and enabled for interaction.
    async fn is_clickable(&self, locator: &Locator) -> Result<bool, DriverError>;

    /// Bring the element into the viewport.
    async fn scroll_into_view(&self, locator: &Locator) -> Result<(), DriverError>;

    /// Dispatch a click on the element.
    async fn click(&self, locator: &Locator) -> Result<(), DriverError>;

    /// Clear existing content, then insert `text`.
    async fn clear_and_type(&self, locator: &Locator, text: &str) -> Result<(), DriverError>;

    /// Visible labels of the options of a select element, in DOM order.
    async fn option_labels(&self, locator: &Locator) -> Result<Vec<String>, DriverError>;

    /// Select the option at `index`.
    async fn select_by_index(&self, locator: &Locator, index: usize) -> Result<(), DriverError>;

    /// Select the option whose visible label equals `label`.
    async fn select_by_label(&self, locator: &Locator, label: &str) -> Result<(), DriverError>;

    /// Whether the rendered page text contains `needle`.
    async fn page_contains_text(&self, needle: &str) -> Result<bool, DriverError>;

    /// Navigate the session to `url` and wait for the load to settle.
    async fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// Capture a screenshot of the current visual state to `path`.
    async fn capture_screenshot(&self, path: &Path) -> Result<(), DriverError>;

    /// Tear down the session. Must be safe to call more than once.
    async fn close(&self) -> Result<(), DriverError>;
}
