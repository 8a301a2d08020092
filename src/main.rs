//! cfn-param-check - CLI entrypoint.
//!
//! Usage:
//!   cfn-param-check <template-file> <parameter-file>
//!   cfn-param-check --config checker.toml --log-level debug stack.yaml params.json

use anyhow::Result;
use cfn_param_check::cli::{parse_args, run};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return Ok(code),
    };
    run(cli)
}
