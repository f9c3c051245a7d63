// cursus-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(cursus::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / DATA FILES ---
    #[error("YAML Parsing Error in '{path}': {error}")]
    #[diagnostic(
        code(cursus::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml {
        path: String,
        error: serde_yaml::Error,
    },

    #[error("JSON Parsing Error in '{path}': {error}")]
    #[diagnostic(code(cursus::infra::json))]
    Json {
        path: String,
        error: serde_json::Error,
    },

    #[error("Serialization Error: {0}")]
    #[diagnostic(code(cursus::infra::serialize))]
    Serialize(String),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(cursus::infra::config))]
    ConfigError(String),

    #[error("Grading configuration not found at '{0}'")]
    #[diagnostic(
        code(cursus::infra::config_missing),
        help("Run `cursus init` to write a preset configuration.")
    )]
    ConfigNotFound(String),

    #[error("Unsupported file format '{0}' (expected .yaml, .yml or .json)")]
    #[diagnostic(code(cursus::infra::format))]
    UnsupportedFormat(String),

    #[error("No cohort file found under '{0}'")]
    #[diagnostic(code(cursus::infra::no_input))]
    NoInput(String),
}
