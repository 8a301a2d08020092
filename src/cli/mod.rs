//! Command-line interface.
//!
//! `cfn-param-check <template-file> <parameter-file>` checks one parameter
//! file against one template and exits 0 on success, 1 otherwise.

pub mod validate;

pub use validate::run_validate;

use crate::core::config::{CheckConfig, ConfigOverrides};
use crate::core::logging::init_tracing;
use crate::template::TemplateFormat;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

/// One-line usage printed on any argument error.
pub const USAGE: &str = "Usage: cfn-param-check <template-file> <parameter-file>";

/// Check a CloudFormation parameter file against its template.
#[derive(Parser, Debug)]
#[command(name = "cfn-param-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template file (JSON or YAML).
    pub template: PathBuf,

    /// Parameter file: a JSON list of ParameterKey/ParameterValue entries.
    pub parameters: PathBuf,

    /// Configuration file path.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Template format; `auto` reads `.json` files as JSON and anything else as YAML.
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    pub template_format: FormatArg,
}

/// `--template-format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Auto,
    Json,
    Yaml,
}

impl FormatArg {
    /// The forced format, or `None` to detect from the file name.
    pub fn resolve(self) -> Option<TemplateFormat> {
        match self {
            Self::Auto => None,
            Self::Json => Some(TemplateFormat::Json),
            Self::Yaml => Some(TemplateFormat::Yaml),
        }
    }
}

impl Cli {
    /// Overrides the CLI applies on top of the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            log_level: self.log_level.clone(),
        }
    }
}

/// Parse arguments, or produce the exit code to stop with.
///
/// `--help` and `--version` print as usual and exit 0. Every other argument
/// error prints [`USAGE`] on stdout (clap's detail goes to stderr) and exits 1.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            eprint!("{err}");
            println!("{USAGE}");
            ExitCode::from(1)
        }
    })
}

/// Load configuration, set up logging and run the check.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match cli.config {
        Some(ref path) => CheckConfig::from_file(path)?,
        None => CheckConfig::default(),
    };
    config.apply_overrides(&cli.overrides());
    config.validate()?;

    init_tracing(&config.telemetry.log_level);

    run_validate(&cli, &config)
}
