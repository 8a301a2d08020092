//! Comparison of supplied parameters against declared ones.
//!
//! Two findings exist: a supplied parameter the template does not declare,
//! and a declared parameter with no default that was not supplied. Both are
//! collected in full before a verdict is reached.

use crate::core::error::CheckResult;
use crate::params::ParameterFile;
use crate::template::{IntrinsicTags, Template, TemplateFormat};
use std::fmt;
use std::path::{Path, PathBuf};

/// Marker prefixed to each violation line.
pub const FAILURE_MARKER: &str = "❌";

/// Marker prefixed to the success line.
pub const SUCCESS_MARKER: &str = "✅";

/// A single finding against a parameter file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Supplied but not declared by the template.
    ExtraParameter { name: String, template: PathBuf },
    /// Declared without a default but not supplied.
    MissingRequiredParameter { name: String, parameter_file: PathBuf },
}

impl Violation {
    /// The parameter this finding is about.
    pub fn name(&self) -> &str {
        match self {
            Self::ExtraParameter { name, .. } | Self::MissingRequiredParameter { name, .. } => {
                name.as_str()
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraParameter { name, template } => write!(
                f,
                "Parameter '{}' is in JSON but NOT in template: {}",
                name,
                template.display()
            ),
            Self::MissingRequiredParameter {
                name,
                parameter_file,
            } => write!(
                f,
                "Required parameter '{}' missing from JSON file: {}",
                name,
                parameter_file.display()
            ),
        }
    }
}

/// Outcome of checking one parameter file against one template.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    parameter_file: PathBuf,
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn parameter_file(&self) -> &Path {
        &self.parameter_file
    }

    /// All findings: extra parameters first, then missing ones, each group
    /// sorted by name.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn extra(&self) -> impl Iterator<Item = &str> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::ExtraParameter { .. }))
            .map(Violation::name)
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::MissingRequiredParameter { .. }))
            .map(Violation::name)
    }

    /// Output lines: one per violation, or a single success line.
    pub fn lines(&self) -> Vec<String> {
        if self.is_ok() {
            return vec![format!(
                "{} Parameter file OK: {}",
                SUCCESS_MARKER,
                self.parameter_file.display()
            )];
        }
        self.violations
            .iter()
            .map(|v| format!("{FAILURE_MARKER} {v}"))
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Compare supplied parameters against the template's declarations.
pub fn compare(template: &Template, params: &ParameterFile) -> ValidationReport {
    let mut violations = Vec::new();

    // Both name iterators are sorted, so each group comes out ordered.
    for name in params.names().filter(|name| !template.declares(name)) {
        violations.push(Violation::ExtraParameter {
            name: name.to_string(),
            template: template.path().to_path_buf(),
        });
    }

    for declared in template.required() {
        if !params.contains(&declared.name) {
            violations.push(Violation::MissingRequiredParameter {
                name: declared.name.clone(),
                parameter_file: params.path().to_path_buf(),
            });
        }
    }

    let report = ValidationReport {
        parameter_file: params.path().to_path_buf(),
        violations,
    };
    tracing::info!(
        parameter_file = %report.parameter_file.display(),
        extra = report.extra().count(),
        missing = report.missing().count(),
        ok = report.is_ok(),
        "compared parameters"
    );
    report
}

/// How the template should be loaded.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Force a template format instead of detecting it from the file name.
    pub format: Option<TemplateFormat>,
    /// Tags accepted as intrinsics in YAML templates.
    pub tags: IntrinsicTags,
}

/// Load both files and compare them.
pub fn validate_files(
    template: &Path,
    parameter_file: &Path,
    options: &LoadOptions,
) -> CheckResult<ValidationReport> {
    let template = Template::load(template, options.format, &options.tags)?;
    let params = ParameterFile::load(parameter_file)?;
    Ok(compare(&template, &params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterEntry;

    fn template(json: &str) -> Template {
        Template::from_json_str(Path::new("stack.json"), json).unwrap()
    }

    fn params(keys: &[&str]) -> ParameterFile {
        ParameterFile::from_entries(
            Path::new("params.json"),
            keys.iter().map(|k| ParameterEntry {
                key: k.to_string(),
                value: serde_json::Value::String("v".to_string()),
            }),
        )
    }

    #[test]
    fn test_ok_report_has_single_line() {
        let report = compare(
            &template(r#"{"Parameters": {"Env": {}, "Region": {"Default": "us-east-1"}}}"#),
            &params(&["Env"]),
        );
        assert!(report.is_ok());
        assert_eq!(report.lines(), vec!["✅ Parameter file OK: params.json"]);
    }

    #[test]
    fn test_extra_then_missing_sorted() {
        let report = compare(
            &template(r#"{"Parameters": {"Zeta": {}, "Alpha": {}, "Opt": {"Default": 1}}}"#),
            &params(&["Yak", "Bee"]),
        );
        assert!(!report.is_ok());
        assert_eq!(report.extra().collect::<Vec<_>>(), vec!["Bee", "Yak"]);
        assert_eq!(report.missing().collect::<Vec<_>>(), vec!["Alpha", "Zeta"]);
        assert_eq!(
            report.lines(),
            vec![
                "❌ Parameter 'Bee' is in JSON but NOT in template: stack.json",
                "❌ Parameter 'Yak' is in JSON but NOT in template: stack.json",
                "❌ Required parameter 'Alpha' missing from JSON file: params.json",
                "❌ Required parameter 'Zeta' missing from JSON file: params.json",
            ]
        );
    }

    #[test]
    fn test_supplying_defaulted_parameter_is_fine() {
        let report = compare(
            &template(r#"{"Parameters": {"Region": {"Default": "us-east-1"}}}"#),
            &params(&["Region"]),
        );
        assert!(report.is_ok());
    }

    #[test]
    fn test_empty_template_and_params() {
        let report = compare(&template("{}"), &params(&[]));
        assert!(report.is_ok());
        assert_eq!(report.to_string(), "✅ Parameter file OK: params.json\n");
    }
}
