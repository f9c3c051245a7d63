// cursus-core/src/infrastructure/format.rs

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::infrastructure::error::InfrastructureError;

/// On-disk formats for configs, cohorts and reports, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self, InfrastructureError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(InfrastructureError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, InfrastructureError> {
        match self {
            Self::Yaml => serde_yaml::to_string(value)
                .map_err(|e| InfrastructureError::Serialize(e.to_string())),
            Self::Json => serde_json::to_string_pretty(value)
                .map_err(|e| InfrastructureError::Serialize(e.to_string())),
        }
    }
}

/// Reads and deserializes a typed document, YAML or JSON depending on the extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let format = DataFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let origin = path.display().to_string();

    match format {
        DataFormat::Yaml => serde_yaml::from_str(&content).map_err(|error| {
            InfrastructureError::Yaml {
                path: origin,
                error,
            }
        }),
        DataFormat::Json => serde_json::from_str(&content).map_err(|error| {
            InfrastructureError::Json {
                path: origin,
                error,
            }
        }),
    }
}
