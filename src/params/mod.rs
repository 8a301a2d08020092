//! Parameter file loading.
//!
//! A parameter file is the JSON list handed to `aws cloudformation
//! create-stack --parameters file://...`:
//!
//! ```json
//! [
//!   { "ParameterKey": "Env", "ParameterValue": "prod" }
//! ]
//! ```
//!
//! Values are opaque and never inspected. Entries are folded into a map by
//! key in file order, so a repeated key silently keeps its last value.

use crate::core::error::{CheckError, CheckResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One element of a parameter file.
///
/// Other fields (`UsePreviousValue`, `ResolvedValue`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    #[serde(rename = "ParameterKey")]
    pub key: String,
    #[serde(rename = "ParameterValue")]
    pub value: JsonValue,
}

/// Supplied parameters keyed by name.
#[derive(Debug, Clone)]
pub struct ParameterFile {
    path: PathBuf,
    values: BTreeMap<String, JsonValue>,
}

impl ParameterFile {
    /// Load a parameter file from disk.
    pub fn load(path: &Path) -> CheckResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CheckError::read(path, e))?;
        let params = Self::from_json_str(path, &content)?;
        tracing::info!(path = %path.display(), supplied = params.len(), "loaded parameter file");
        Ok(params)
    }

    /// Parse a parameter file. `path` is recorded for reporting only.
    pub fn from_json_str(path: &Path, content: &str) -> CheckResult<Self> {
        let entries: Vec<ParameterEntry> =
            serde_json::from_str(content).map_err(|source| CheckError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        if let Some(index) = entries.iter().position(|e| e.key.is_empty()) {
            return Err(CheckError::malformed_parameter_file(
                path,
                format!("entry {index} has an empty ParameterKey"),
            ));
        }
        Ok(Self::from_entries(path, entries))
    }

    /// Fold entries into a map in order; a later entry replaces an earlier
    /// one with the same key.
    pub fn from_entries(path: &Path, entries: impl IntoIterator<Item = ParameterEntry>) -> Self {
        let mut values = BTreeMap::new();
        let mut overwritten = 0usize;
        for entry in entries {
            if values.insert(entry.key, entry.value).is_some() {
                overwritten += 1;
            }
        }
        if overwritten > 0 {
            tracing::debug!(
                path = %path.display(),
                overwritten,
                "duplicate parameter keys, last value kept"
            );
        }
        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Supplied parameter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
