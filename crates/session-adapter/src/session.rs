//! Browser session lifecycle and driver port implementation

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::TempDir;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use action_kit::{DriverError, DriverPort, Locator};

use crate::{config::SessionConfig, errors::SessionError, js};

/// Exclusively owned handle to one live browser.
///
/// Created once per run, closed exactly once; `close` is idempotent so the
/// guaranteed-teardown path can never double-release.
pub struct BrowserSession {
    browser: Mutex<Browser>,
    page: Page,
    handler_task: JoinHandle<()>,
    closed: AtomicBool,
    // tempdir removed on drop, after the browser is gone
    _profile_dir: Option<TempDir>,
}

impl BrowserSession {
    /// Launch the browser and open the working page.
    pub async fn launch(config: SessionConfig) -> Result<Self, SessionError> {
        let profile_dir = match &config.user_data_dir {
            Some(_) => None,
            None => Some(
                tempfile::tempdir().map_err(|err| SessionError::Profile(err.to_string()))?,
            ),
        };
        let data_dir = config
            .user_data_dir
            .clone()
            .or_else(|| profile_dir.as_ref().map(|dir| dir.path().to_path_buf()))
            .unwrap_or_default();

        let mut builder = BrowserConfig::builder()
            .window_size(config.window.0, config.window.1)
            .user_data_dir(&data_dir)
            .no_sandbox()
            .args(vec![
                "--disable-gpu",
                "--disable-dev-shm-usage",
                "--start-maximized",
            ]);
        if !config.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &config.executable {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder.build().map_err(SessionError::Config)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|err| SessionError::Launch(err.to_string()))?;

        // The handler stream must be polled for the session to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    debug!(error = %err, "cdp handler reported an error");
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|err| SessionError::Page(err.to_string()))?;

        info!(
            headless = config.headless,
            width = config.window.0,
            height = config.window.1,
            "browser session started"
        );

        Ok(Self {
            browser: Mutex::new(browser),
            page,
            handler_task,
            closed: AtomicBool::new(false),
            _profile_dir: profile_dir,
        })
    }

    async fn eval<T: DeserializeOwned>(&self, expr: String) -> Result<T, DriverError> {
        let result = self
            .page
            .evaluate(expr)
            .await
            .map_err(|err| DriverError::Backend(err.to_string()))?;
        result
            .into_value()
            .map_err(|err| DriverError::Backend(format!("script result decoding failed: {err}")))
    }

    async fn eval_status(&self, locator: &Locator, expr: String) -> Result<StatusReply, DriverError> {
        let reply: StatusReply = self.eval(expr).await?;
        match reply.status.as_str() {
            "ok" => Ok(reply),
            "missing" => Err(DriverError::NotFound(locator.to_string())),
            "disabled" => Err(DriverError::NotInteractable(format!("{locator} is disabled"))),
            "not-select" => Err(DriverError::UnexpectedState(format!(
                "{locator} is not a select element"
            ))),
            "out-of-range" => Err(DriverError::NotFound(format!(
                "{locator} has no option at the requested index"
            ))),
            "option-missing" => Err(DriverError::NotFound(format!(
                "{locator} has no option with the requested label"
            ))),
            other => Err(DriverError::UnexpectedState(format!(
                "{locator} reported status '{other}'"
            ))),
        }
    }
}

/// Status object returned by interaction scripts.
#[derive(Debug, Deserialize)]
struct StatusReply {
    status: String,
    #[serde(default)]
    labels: Option<Vec<String>>,
}

#[async_trait]
impl DriverPort for BrowserSession {
    async fn exists(&self, locator: &Locator) -> Result<bool, DriverError> {
        self.eval(js::exists_expr(locator)?).await
    }

    async fn is_visible(&self, locator: &Locator) -> Result<bool, DriverError> {
        self.eval(js::visible_expr(locator)?).await
    }

    async fn is_clickable(&self, locator: &Locator) -> Result<bool, DriverError> {
        self.eval(js::clickable_expr(locator)?).await
    }

    async fn scroll_into_view(&self, locator: &Locator) -> Result<(), DriverError> {
        self.eval_status(locator, js::scroll_expr(locator)?)
            .await
            .map(|_| ())
    }

    async fn click(&self, locator: &Locator) -> Result<(), DriverError> {
        self.eval_status(locator, js::click_expr(locator)?)
            .await
            .map(|_| ())
    }

    async fn clear_and_type(&self, locator: &Locator, text: &str) -> Result<(), DriverError> {
        self.eval_status(locator, js::clear_and_type_expr(locator, text)?)
            .await
            .map(|_| ())
    }

    async fn option_labels(&self, locator: &Locator) -> Result<Vec<String>, DriverError> {
        let reply = self
            .eval_status(locator, js::option_labels_expr(locator)?)
            .await?;
        Ok(reply.labels.unwrap_or_default())
    }

    async fn select_by_index(&self, locator: &Locator, index: usize) -> Result<(), DriverError> {
        self.eval_status(locator, js::select_index_expr(locator, index)?)
            .await
            .map(|_| ())
    }

    async fn select_by_label(&self, locator: &Locator, label: &str) -> Result<(), DriverError> {
        self.eval_status(locator, js::select_label_expr(locator, label)?)
            .await
            .map(|_| ())
    }

    async fn page_contains_text(&self, needle: &str) -> Result<bool, DriverError> {
        self.eval(js::contains_text_expr(needle)?).await
    }

    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        self.page
            .goto(url)
            .await
            .map_err(|err| DriverError::Backend(format!("navigation failed: {err}")))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|err| DriverError::Backend(format!("navigation did not settle: {err}")))?;
        Ok(())
    }

    async fn capture_screenshot(&self, path: &Path) -> Result<(), DriverError> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();
        self.page
            .save_screenshot(params, path)
            .await
            .map(|_| ())
            .map_err(|err| DriverError::Backend(format!("screenshot capture failed: {err}")))
    }

    async fn close(&self) -> Result<(), DriverError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            debug!("session already closed");
            return Ok(());
        }

        let mut browser = self.browser.lock().await;
        let result = browser.close().await;
        if let Err(err) = browser.wait().await {
            warn!(error = %err, "browser process did not exit cleanly");
        }
        self.handler_task.abort();
        info!("browser session closed");

        result
            .map(|_| ())
            .map_err(|err| DriverError::Backend(format!("browser close failed: {err}")))
    }
}
