//! Configuration file loading
//!
//! The optional TOML file mirrors the command-line options:
//!
//! ```toml
//! [format]
//! input_delimiter = ","
//! output_delimiter = " | "
//! ```
//!
//! Flags given on the command line win over the file; anything left unset
//! falls back to the built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tailfeather_core::LineFormat;

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub format: LineFormat,
}

impl AppConfig {
    /// Final line format after applying command-line overrides
    pub fn line_format(
        &self,
        input_delimiter: Option<&str>,
        output_delimiter: Option<&str>,
    ) -> LineFormat {
        let mut format = self.format.clone();
        if let Some(delimiter) = input_delimiter {
            format = format.with_input_delimiter(delimiter);
        }
        if let Some(delimiter) = output_delimiter {
            format = format.with_output_delimiter(delimiter);
        }
        format
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [format]
            input_delimiter = ","
            output_delimiter = " | "
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.format.input_delimiter, ",");
        assert_eq!(config.format.output_delimiter, " | ");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.format, LineFormat::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<AppConfig, _> = toml::from_str("[colours]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config: AppConfig = toml::from_str(
            r#"
            [format]
            input_delimiter = ","
            output_delimiter = ";"
        "#,
        )
        .unwrap();

        let format = config.line_format(None, Some("\t"));
        assert_eq!(format.input_delimiter, ",");
        assert_eq!(format.output_delimiter, "\t");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\ninput_delimiter = \"|\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.format.input_delimiter, "|");
        assert_eq!(config.format.output_delimiter, "\t");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
