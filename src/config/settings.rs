//! User settings for monee
//!
//! Display preferences, the targets a fresh budget starts with, and whether
//! mutations are written to the audit log.

use serde::{Deserialize, Serialize};

use super::paths::MoneePaths;
use crate::error::MoneeError;
use crate::models::{DisplayFrequency, TargetPercentages};

/// User settings for monee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period totals are shown in when no `--display` flag is given
    #[serde(default)]
    pub display_frequency: DisplayFrequency,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Targets applied by `scenario new` and on first run
    #[serde(default)]
    pub default_targets: TargetPercentages,

    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            display_frequency: DisplayFrequency::default(),
            currency_symbol: default_currency(),
            default_targets: TargetPercentages::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &MoneePaths) -> Result<Self, MoneeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| MoneeError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| MoneeError::Config(format!("Failed to parse settings file: {}", e)))?;

        tracing::debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoneePaths) -> Result<(), MoneeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MoneeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MoneeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Update one setting by its `config set` key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), MoneeError> {
        match key {
            "display_frequency" | "display-frequency" => {
                self.display_frequency = value.parse().map_err(MoneeError::Config)?;
            }
            "currency_symbol" | "currency-symbol" | "currency" => {
                self.currency_symbol = value.trim().to_string();
            }
            "audit_enabled" | "audit-enabled" | "audit" => {
                self.audit_enabled = parse_bool(value)?;
            }
            "default_targets" | "default-targets" => {
                let targets = parse_targets_triple(value)?;
                targets
                    .validate()
                    .map_err(|e| MoneeError::Validation(e.to_string()))?;
                self.default_targets = targets;
            }
            other => {
                return Err(MoneeError::Config(format!(
                    "Unknown setting '{}'. Valid: display_frequency, currency_symbol, \
                     audit_enabled, default_targets",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool, MoneeError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(MoneeError::Config(format!("Expected true/false, got '{}'", other))),
    }
}

/// Parse `"15,65,20"` or `"15/65/20"` as savings/fundamental/enjoyment
fn parse_targets_triple(value: &str) -> Result<TargetPercentages, MoneeError> {
    let parts: Vec<f64> = value
        .split(|c| c == ',' || c == '/')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| MoneeError::Config(format!("Invalid target list '{}': {}", value, e)))?;

    match parts.as_slice() {
        [savings, fundamental, enjoyment] => {
            Ok(TargetPercentages::new(*savings, *fundamental, *enjoyment))
        }
        _ => Err(MoneeError::Config(
            "Expected three targets: savings,fundamental,enjoyment".into(),
        )),
    }
}
