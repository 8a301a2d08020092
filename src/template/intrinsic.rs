//! CloudFormation intrinsic tags in YAML templates.
//!
//! Short-form intrinsics (`!Ref Env`, `!Sub "${AWS::Region}"`, `!If [...]`)
//! are YAML local tags. The checker never evaluates them: a node carrying a
//! known tag collapses to an opaque string, and any other tag is rejected.

use crate::core::error::{CheckError, CheckResult};
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeSet;
use std::path::Path;

/// Short-form intrinsic function and condition tags CloudFormation accepts.
pub const CLOUDFORMATION_TAGS: &[&str] = &[
    "!And",
    "!Base64",
    "!Cidr",
    "!Condition",
    "!Equals",
    "!FindInMap",
    "!ForEach",
    "!GetAZs",
    "!GetAtt",
    "!If",
    "!ImportValue",
    "!Join",
    "!Length",
    "!Not",
    "!Or",
    "!Ref",
    "!Select",
    "!Split",
    "!Sub",
    "!ToJsonString",
    "!Transform",
];

/// The set of YAML tags treated as opaque intrinsics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrinsicTags {
    tags: BTreeSet<String>,
}

impl Default for IntrinsicTags {
    fn default() -> Self {
        Self {
            tags: CLOUDFORMATION_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl IntrinsicTags {
    /// The CloudFormation tags plus `extra`, each written with its leading `!`.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags = Self::default();
        tags.tags.extend(extra.into_iter().map(Into::into));
        tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Convert a parsed YAML document into plain JSON, replacing every known
    /// tagged node with its opaque text.
    ///
    /// `path` is only used for error reporting.
    pub fn resolve(&self, value: YamlValue, path: &Path) -> CheckResult<JsonValue> {
        Ok(match value {
            YamlValue::Null => JsonValue::Null,
            YamlValue::Bool(b) => JsonValue::Bool(b),
            YamlValue::Number(n) => yaml_number(&n),
            YamlValue::String(s) => JsonValue::String(s),
            YamlValue::Sequence(seq) => JsonValue::Array(
                seq.into_iter()
                    .map(|v| self.resolve(v, path))
                    .collect::<CheckResult<Vec<_>>>()?,
            ),
            YamlValue::Mapping(mapping) => {
                let mut object = Map::with_capacity(mapping.len());
                for (key, value) in mapping {
                    let key = mapping_key(key, path)?;
                    object.insert(key, self.resolve(value, path)?);
                }
                JsonValue::Object(object)
            }
            YamlValue::Tagged(tagged) => {
                let tag = tagged.tag.to_string();
                if !self.contains(&tag) {
                    return Err(CheckError::UnknownTag {
                        path: path.to_path_buf(),
                        tag,
                    });
                }
                JsonValue::String(opaque_text(self.resolve(tagged.value, path)?))
            }
        })
    }
}

/// The literal text kept for an intrinsic node.
fn opaque_text(inner: JsonValue) -> String {
    match inner {
        JsonValue::String(s) => s,
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else {
        // .nan and .inf have no JSON number form
        n.as_f64()
            .and_then(Number::from_f64)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(n.to_string()))
    }
}

fn mapping_key(key: YamlValue, path: &Path) -> CheckResult<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        other => Err(CheckError::malformed_template(
            path,
            format!("unsupported mapping key: {other:?}"),
        )),
    }
}
