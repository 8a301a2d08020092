//! Common test utilities.
//!
//! This module contains shared helpers for integration tests.
//! Import with `mod common;` in test files.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Template declaring a required `Env` and a defaulted `Region`.
pub const ENV_REGION_TEMPLATE: &str =
    r#"{"Parameters": {"Env": {}, "Region": {"Default": "us-east-1"}}}"#;

/// YAML template using a spread of short-form intrinsics.
pub const INTRINSIC_YAML_TEMPLATE: &str = r#"
AWSTemplateFormatVersion: "2010-09-09"
Parameters:
  Env:
    Type: String
    AllowedValues: [dev, prod]
  BucketSuffix:
    Type: String
    Default: ""
Conditions:
  IsProd: !Equals [!Ref Env, prod]
  NotProd: !Not [!Condition IsProd]
Resources:
  Bucket:
    Type: AWS::S3::Bucket
    Properties:
      BucketName: !Sub "${AWS::StackName}-${Env}${BucketSuffix}"
      Tags:
        - Key: Zone
          Value: !Select [0, !GetAZs ""]
        - Key: Shared
          Value: !ImportValue
            Fn::Sub: "${Env}-shared"
Outputs:
  Arn:
    Value: !If [IsProd, !GetAtt Bucket.Arn, !Join ["", ["none"]]]
"#;

/// Write `content` to a temp file whose name ends with `suffix`.
pub fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("cfn-param-check-")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Build a parameter file body from key/value pairs.
pub fn params_json(pairs: &[(&str, &str)]) -> String {
    let entries: Vec<serde_json::Value> = pairs
        .iter()
        .map(|(k, v)| serde_json::json!({"ParameterKey": k, "ParameterValue": v}))
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// Run the checker binary with the given arguments.
pub fn run_checker<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_cfn-param-check"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run cfn-param-check")
}

/// Run the checker on a template/parameter-file pair.
pub fn check(template: &Path, params: &Path) -> Output {
    run_checker([template.as_os_str(), params.as_os_str()])
}

/// Non-empty stdout lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}
