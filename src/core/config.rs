//! Configuration parsing and validation.
//!
//! The checker runs with built-in defaults. A TOML file passed with
//! `--config` can extend the intrinsic tag set and set the log level, and
//! CLI flags override whatever the file says.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `telemetry.log_level` and `--log-level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level checker configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Template parsing configuration.
    #[serde(default)]
    pub template: TemplateConfig,

    /// Logging configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Template parsing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// YAML tags accepted in addition to the CloudFormation intrinsics,
    /// written with their leading `!` (e.g. `"!Rain::Embed"`).
    #[serde(default)]
    pub extra_intrinsic_tags: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl CheckConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: CheckConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CheckConfig =
            toml::from_str(content).with_context(|| "failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides to the configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref log_level) = overrides.log_level {
            self.telemetry.log_level = log_level.clone();
        }
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.validate_template()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_template(&self) -> Result<()> {
        for tag in &self.template.extra_intrinsic_tags {
            if !tag.starts_with('!') || tag.len() < 2 {
                anyhow::bail!(
                    "template.extra_intrinsic_tags entries must look like '!Name', got: {:?}",
                    tag
                );
            }
            if tag.chars().any(char::is_whitespace) {
                anyhow::bail!(
                    "template.extra_intrinsic_tags entries must not contain whitespace, got: {:?}",
                    tag
                );
            }
        }
        Ok(())
    }

    fn validate_telemetry(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "telemetry.log_level must be one of {:?}, got: {}",
                VALID_LOG_LEVELS,
                self.telemetry.log_level
            );
        }
        Ok(())
    }
}

/// CLI override options that can be applied to configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override log level.
    pub log_level: Option<String>,
}
