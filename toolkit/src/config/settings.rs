// Toolkit settings, loaded from a JSON document or left at defaults.
use crate::error::{Result, ToolkitError};
use crate::magnitude::size::SizeFormatOptions;
use serde::Deserialize;
use shared::models::TimeStyle;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ToolkitSettings {
    /// Region dataset to load instead of the embedded one.
    pub region_dataset: Option<PathBuf>,
    pub size: SizeFormatOptions,
    pub time_style: TimeStyle,
}

impl Default for ToolkitSettings {
    fn default() -> Self {
        ToolkitSettings {
            region_dataset: None,
            size: SizeFormatOptions::default(),
            time_style: TimeStyle::Numeric,
        }
    }
}

impl ToolkitSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ToolkitError::ConfigError(format!("Invalid settings document: {}", e)))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ToolkitError::ConfigError(format!("Failed to read settings '{}': {}", path.display(), e))
        })?;
        let settings = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded toolkit settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{NumberStyle, SizeMode, UnitStyle};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = ToolkitSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, ToolkitSettings::default());
    }

    #[test]
    fn test_partial_size_section() {
        let json = r#"{
            "region_dataset": "/etc/regions.csv",
            "size": { "mode": "decimal", "unit_style": "english" },
            "time_style": "fuzzy"
        }"#;
        let settings = ToolkitSettings::from_json_str(json).unwrap();
        assert_eq!(settings.region_dataset, Some(PathBuf::from("/etc/regions.csv")));
        assert_eq!(settings.size.mode, SizeMode::Decimal);
        assert_eq!(settings.size.unit_style, UnitStyle::English);
        assert_eq!(settings.size.number_style, NumberStyle::Persian);
        assert_eq!(settings.size.decimals, 2);
        assert_eq!(settings.time_style, TimeStyle::Fuzzy);
    }

    #[test]
    fn test_invalid_document_is_config_error() {
        let result = ToolkitSettings::from_json_str(r#"{ "time_style": "sideways" }"#);
        assert!(matches!(result, Err(ToolkitError::ConfigError(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "size": {{ "decimals": 1, "fixed_decimals": true }} }}"#).unwrap();
        let settings = ToolkitSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.size.decimals, 1);
        assert!(settings.size.fixed_decimals);
    }

    #[test]
    fn test_from_missing_file() {
        let result = ToolkitSettings::from_json_file("non_existent_settings.json");
        assert!(result.unwrap_err().to_string().contains("Failed to read settings"));
    }
}
