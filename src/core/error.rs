//! Error types for loading templates and parameter files.
//!
//! Every variant is fatal for a run: the checker never validates against a
//! partially loaded document. Validation findings are not errors; they are
//! collected as [`crate::check::Violation`]s instead.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that abort a check before any comparison happens.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The file is missing or could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or does not have the expected JSON shape.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is not valid YAML.
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A YAML node carries a tag outside the configured intrinsic set.
    #[error("unsupported tag {tag} in {}", path.display())]
    UnknownTag { path: PathBuf, tag: String },

    /// The template parsed but its structure is not usable.
    #[error("malformed template {}: {message}", path.display())]
    MalformedTemplate { path: PathBuf, message: String },

    /// The parameter file parsed but its structure is not usable.
    #[error("malformed parameter file {}: {message}", path.display())]
    MalformedParameterFile { path: PathBuf, message: String },
}

impl CheckError {
    /// Create a Read error.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a MalformedTemplate error.
    pub fn malformed_template(path: &Path, message: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a MalformedParameterFile error.
    pub fn malformed_parameter_file(path: &Path, message: impl Into<String>) -> Self {
        Self::MalformedParameterFile {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// The path of the document that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Json { path, .. }
            | Self::Yaml { path, .. }
            | Self::UnknownTag { path, .. }
            | Self::MalformedTemplate { path, .. }
            | Self::MalformedParameterFile { path, .. } => path,
        }
    }

    /// Check if this error comes from the document syntax rather than its
    /// structure or the filesystem.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Json { .. } | Self::Yaml { .. } | Self::UnknownTag { .. }
        )
    }
}

/// Result type using CheckError.
pub type CheckResult<T> = Result<T, CheckError>;
