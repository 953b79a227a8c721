//! Chromium-backed implementation of the driver port
//!
//! Owns a launched browser process and one page, resolving locators and
//! dispatching interactions through evaluated scripts over CDP.

mod config;
mod errors;
mod js;
mod session;

pub use config::*;
pub use errors::*;
pub use session::*;
