//! Core infrastructure.
//!
//! - [`config`] - Configuration parsing and validation
//! - [`error`] - Load error types
//! - [`logging`] - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;
