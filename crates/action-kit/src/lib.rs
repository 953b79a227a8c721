//! Resilient locate/wait/act primitives for driving a rendered DOM.
//!
//! The building blocks used by every workflow step:
//! - `Locator`: strategy + value pair identifying one element
//! - `DriverPort`: the abstract browser capability (find, inspect, act)
//! - polling waits bounded by a deadline
//! - `click_with_retry` / `type_into_field` / select helpers

pub mod errors;
mod locator;
mod port;
mod primitives;
mod wait;

pub use errors::*;
pub use locator::*;
pub use port::*;
pub use primitives::*;
pub use wait::*;
