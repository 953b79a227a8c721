//! Closed error taxonomy for driver interactions

use thiserror::Error;

/// Errors surfaced by `DriverPort` implementations and the primitives
/// built on top of them.
///
/// The taxonomy is deliberately small so callers can tell retryable
/// conditions apart from fatal ones instead of treating every failure
/// uniformly.
#[derive(Debug, Error, Clone)]
pub enum DriverError {
    /// No element matched the locator
    #[error("element not found: {0}")]
    NotFound(String),

    /// Element exists but is hidden, disabled, or obstructed
    #[error("element not interactable: {0}")]
    NotInteractable(String),

    /// A bounded wait expired before its condition held
    #[error("timed out: {0}")]
    Timeout(String),

    /// The page is in a state the interaction cannot handle
    #[error("unexpected page state: {0}")]
    UnexpectedState(String),

    /// Browser backend communication failure
    #[error("browser backend error: {0}")]
    Backend(String),
}

impl DriverError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// An element that is missing or momentarily not interactable can show
    /// up once the page finishes rendering; an unexpected page state will
    /// not fix itself.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, DriverError::UnexpectedState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryability_split() {
        assert!(DriverError::Timeout("t".into()).is_retryable());
        assert!(DriverError::NotFound("n".into()).is_retryable());
        assert!(DriverError::NotInteractable("n".into()).is_retryable());
        assert!(DriverError::Backend("b".into()).is_retryable());
        assert!(!DriverError::UnexpectedState("u".into()).is_retryable());
    }
}
