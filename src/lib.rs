//! cfn-param-check - pre-deployment guard for CloudFormation parameter files.
//!
//! Checks that a parameter file supplies exactly what a template expects:
//! every supplied parameter is declared, and every declared parameter without
//! a default is supplied. Meant to run in CI before a deployment is attempted.
//!
//! # Flow
//!
//! ```text
//!   template (.json / YAML) ──► template::Template ──┐
//!                                                    ├──► check::compare ──► ValidationReport
//!   parameter file (.json) ──► params::ParameterFile ┘
//! ```
//!
//! # Module Organization
//!
//! - [`template`] - Template loading and intrinsic tag handling
//! - [`params`] - Parameter file loading
//! - [`check`] - Comparison and reporting
//! - [`cli`] - Command-line interface
//! - [`core::config`] - Configuration parsing and validation
//! - [`core::error`] - Load error types
//! - [`core::logging`] - Tracing setup

// Core infrastructure
pub mod core;

// Document loaders
pub mod params;
pub mod template;

// Comparison and reporting
pub mod check;

// CLI
pub mod cli;

// Re-exports for convenience
pub use self::core::{config, error};
pub use check::{compare, validate_files, LoadOptions, ValidationReport, Violation};
pub use params::{ParameterEntry, ParameterFile};
pub use template::{DeclaredParameter, IntrinsicTags, Template, TemplateFormat};
