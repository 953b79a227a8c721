//! Binary-side surface of the workflow driver: argument parsing and
//! interactive collection of the registration record.

pub mod cli;
pub mod prompts;
