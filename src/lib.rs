//! tempo library crate.
//!
//! Exposes configuration resolution and its collaborators for the CLI and
//! for integration tests.

pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
