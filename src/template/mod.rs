//! Template loading.
//!
//! A template is a JSON or YAML CloudFormation document. Only its top-level
//! `Parameters` section matters here: the name of each declared parameter and
//! whether its declaration carries a `Default` field.

pub mod intrinsic;

pub use intrinsic::{IntrinsicTags, CLOUDFORMATION_TAGS};

use crate::core::error::{CheckError, CheckResult};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level field holding parameter declarations.
pub const PARAMETERS_FIELD: &str = "Parameters";

/// Declaration field whose presence makes a parameter optional.
pub const DEFAULT_FIELD: &str = "Default";

/// Serialization format of a template document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    /// Paths ending in `.json` (case-sensitive) are JSON, everything else is
    /// read as YAML.
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str().as_encoded_bytes().ends_with(b".json") {
            Self::Json
        } else {
            Self::Yaml
        }
    }
}

impl std::fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// A parameter declared by the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredParameter {
    pub name: String,
    pub has_default: bool,
}

/// The declared parameters of one template.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    parameters: BTreeMap<String, DeclaredParameter>,
}

impl Template {
    /// Load a template from disk.
    ///
    /// `format` overrides suffix detection when set.
    pub fn load(
        path: &Path,
        format: Option<TemplateFormat>,
        tags: &IntrinsicTags,
    ) -> CheckResult<Self> {
        let format = format.unwrap_or_else(|| TemplateFormat::from_path(path));
        let content = std::fs::read_to_string(path).map_err(|e| CheckError::read(path, e))?;
        tracing::debug!(path = %path.display(), %format, "parsing template");

        let template = match format {
            TemplateFormat::Json => Self::from_json_str(path, &content)?,
            TemplateFormat::Yaml => Self::from_yaml_str(path, &content, tags)?,
        };
        tracing::info!(
            path = %path.display(),
            declared = template.len(),
            required = template.required().count(),
            "loaded template"
        );
        Ok(template)
    }

    /// Parse a JSON template. `path` is recorded for reporting only.
    pub fn from_json_str(path: &Path, content: &str) -> CheckResult<Self> {
        let document: JsonValue = serde_json::from_str(content).map_err(|source| {
            CheckError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_document(path, document)
    }

    /// Parse a YAML template, collapsing intrinsic tags to opaque strings.
    pub fn from_yaml_str(path: &Path, content: &str, tags: &IntrinsicTags) -> CheckResult<Self> {
        let yaml_error = |source: serde_yaml::Error| CheckError::Yaml {
            path: path.to_path_buf(),
            source,
        };
        let mut document: serde_yaml::Value = serde_yaml::from_str(content).map_err(yaml_error)?;
        // `<<: *anchor` keys are folded into their mapping before lookup.
        document.apply_merge().map_err(yaml_error)?;
        let document = tags.resolve(document, path)?;
        Self::from_document(path, document)
    }

    fn from_document(path: &Path, document: JsonValue) -> CheckResult<Self> {
        let JsonValue::Object(mut root) = document else {
            return Err(CheckError::malformed_template(
                path,
                "document root is not a mapping",
            ));
        };

        let declarations = match root.remove(PARAMETERS_FIELD) {
            None | Some(JsonValue::Null) => serde_json::Map::new(),
            Some(JsonValue::Object(declarations)) => declarations,
            Some(_) => {
                return Err(CheckError::malformed_template(
                    path,
                    format!("{PARAMETERS_FIELD} is not a mapping"),
                ))
            }
        };

        let mut parameters = BTreeMap::new();
        for (name, declaration) in declarations {
            let JsonValue::Object(declaration) = declaration else {
                return Err(CheckError::malformed_template(
                    path,
                    format!("declaration of parameter '{name}' is not a mapping"),
                ));
            };
            // Presence is what counts; `Default: ""` still makes it optional.
            let has_default = declaration.contains_key(DEFAULT_FIELD);
            parameters.insert(name.clone(), DeclaredParameter { name, has_default });
        }

        Ok(Self {
            path: path.to_path_buf(),
            parameters,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared parameter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Whether `name` is declared with a default. False for undeclared names.
    pub fn has_default(&self, name: &str) -> bool {
        self.parameters.get(name).is_some_and(|p| p.has_default)
    }

    /// Declared parameters that have no default and must be supplied.
    pub fn required(&self) -> impl Iterator<Item = &DeclaredParameter> {
        self.parameters.values().filter(|p| !p.has_default)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
