//! Session setup errors
//!
//! Interaction-time failures use the shared `DriverError` taxonomy; these
//! cover launch and page setup, before any interaction runs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The assembled browser configuration was rejected
    #[error("invalid browser configuration: {0}")]
    Config(String),

    /// The browser process could not be started or attached
    #[error("browser launch failed: {0}")]
    Launch(String),

    /// The initial page could not be created
    #[error("page setup failed: {0}")]
    Page(String),

    /// Temporary profile directory could not be created
    #[error("profile directory setup failed: {0}")]
    Profile(String),
}
