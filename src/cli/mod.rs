//! Command-line interface
//!
//! Argument parsing for the `architect-sdk` binary.

pub mod commands;

pub use commands::{Command, Opt};
