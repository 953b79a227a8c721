//! Browser session configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Run without a visible window
    pub headless: bool,

    /// Browser executable; resolved from the environment when unset
    pub executable: Option<PathBuf>,

    /// Window size; stands in for a maximized window in headless runs
    pub window: (u32, u32),

    /// Profile directory; a temporary directory is used when unset
    pub user_data_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: false,
            executable: None,
            window: (1920, 1080),
            user_data_dir: None,
        }
    }
}

impl SessionConfig {
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert!(!config.headless);
        assert!(config.executable.is_none());
        assert_eq!(config.window, (1920, 1080));
    }
}
