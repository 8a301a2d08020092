//! The check itself: load both files, compare, print the report.

use super::Cli;
use crate::check::{validate_files, LoadOptions};
use crate::core::config::CheckConfig;
use crate::template::IntrinsicTags;
use anyhow::{Context, Result};
use std::process::ExitCode;

/// Run the check and map the verdict to an exit code.
///
/// Load failures are returned as errors and never reach stdout.
pub fn run_validate(cli: &Cli, config: &CheckConfig) -> Result<ExitCode> {
    let options = LoadOptions {
        format: cli.template_format.resolve(),
        tags: IntrinsicTags::with_extra(config.template.extra_intrinsic_tags.iter().cloned()),
    };

    let report = validate_files(&cli.template, &cli.parameters, &options).with_context(|| {
        format!(
            "failed to check {} against {}",
            cli.parameters.display(),
            cli.template.display()
        )
    })?;

    print!("{report}");

    if report.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(
            violations = report.violations().len(),
            "parameter file does not match template"
        );
        Ok(ExitCode::from(1))
    }
}
