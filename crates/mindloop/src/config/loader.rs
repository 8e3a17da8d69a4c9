use std::path::{Path, PathBuf};

use crate::config::schema::EngineConfig;
use crate::error::ConfigError;

const SCHEMA_JSON: &str = include_str!("../../schema/engine-config-v1.json");

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = load_config_from_str(&content)?;
    log::info!("Loaded engine config from {}", path.display());
    Ok(config)
}

pub fn load_config_from_str(content: &str) -> Result<EngineConfig, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;

    validate_schema(&json_value)?;

    let config: EngineConfig = serde_json::from_value(json_value)?;

    validate_config(&config)?;

    Ok(config)
}

/// `<platform config dir>/mindloop/config.json`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mindloop").join("config.json"))
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let error_messages: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| e.to_string())
        .collect();
    if !error_messages.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: error_messages.join("; "),
        });
    }

    Ok(())
}

fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    if config.version != "1.0" {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    let analysis = &config.analysis;
    if !(0.0..=1.0).contains(&analysis.topic_probability) {
        return Err(ConfigError::Validation {
            message: format!(
                "topic_probability must be within [0, 1], got {}",
                analysis.topic_probability
            ),
        });
    }

    if analysis.max_key_terms == 0 {
        return Err(ConfigError::Validation {
            message: "max_key_terms must be at least 1".to_string(),
        });
    }

    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "logging.filter must not be empty".to_string(),
        });
    }

    Ok(())
}
