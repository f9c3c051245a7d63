// cursus-core/src/infrastructure/config/grading.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument};

use crate::domain::grading::{GradingConfig, RoundingMode};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::format::load_document;

const CANDIDATES: [&str; 4] = ["cursus.yaml", "cursus.yml", "grading.yaml", "cursus.json"];

/// Loads a grading configuration from a file, or from a directory holding one.
///
/// `CURSUS_*` environment variables are layered on top of the file. The
/// result is not validated here; `GradingEngine::new` does that.
#[instrument]
pub fn load_grading_config(path: &Path) -> Result<GradingConfig, InfrastructureError> {
    let config_path = find_grading_config(path)?;
    info!(path = ?config_path, "Loading grading configuration");

    let mut config: GradingConfig = load_document(&config_path)?;

    // Lets CI runs tweak rounding without editing the file:
    // CURSUS_ROUNDING_MODE=down cursus evaluate ...
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn find_grading_config(path: &Path) -> Result<PathBuf, InfrastructureError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if path.is_dir() {
        for filename in CANDIDATES {
            let p = path.join(filename);
            if p.exists() {
                return Ok(p);
            }
        }
        return Err(InfrastructureError::ConfigNotFound(format!(
            "{} (checked: {})",
            path.display(),
            CANDIDATES.join(", ")
        )));
    }
    Err(InfrastructureError::ConfigNotFound(path.display().to_string()))
}

/// Applies `CURSUS_ROUNDING_MODE`, `CURSUS_DECIMAL_PLACES` and `CURSUS_PASSING_AVERAGE`.
pub fn apply_env_overrides<F>(config: &mut GradingConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("CURSUS_ROUNDING_MODE") {
        let mode = RoundingMode::from_str(&val).map_err(InfrastructureError::ConfigError)?;
        info!(old = %config.rounding_mode, new = %mode, "Overriding rounding mode via ENV");
        config.rounding_mode = mode;
    }
    if let Some(val) = lookup("CURSUS_DECIMAL_PLACES") {
        let places = val.trim().parse::<u32>().map_err(|_| {
            InfrastructureError::ConfigError(format!(
                "CURSUS_DECIMAL_PLACES must be a non-negative integer, got '{}'",
                val
            ))
        })?;
        info!(old = config.decimal_places, new = places, "Overriding decimal places via ENV");
        config.decimal_places = places;
    }
    if let Some(val) = lookup("CURSUS_PASSING_AVERAGE") {
        let passing = val.trim().parse::<f64>().map_err(|_| {
            InfrastructureError::ConfigError(format!(
                "CURSUS_PASSING_AVERAGE must be a number, got '{}'",
                val
            ))
        })?;
        info!(old = config.passing_average, new = passing, "Overriding passing average via ENV");
        config.passing_average = passing;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_from_directory() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("grading.yaml"),
            "passing_average: 11\nrounding_mode: up\n",
        )?;

        let config = load_grading_config(dir.path())?;
        assert_eq!(config.passing_average, 11.0);
        assert_eq!(config.rounding_mode, RoundingMode::Up);
        Ok(())
    }

    #[test]
    fn test_load_json_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rules.json");
        fs::write(&path, r#"{"default_scale": 100, "passing_average": 50}"#)?;

        let config = load_grading_config(&path)?;
        assert_eq!(config.default_scale, 100.0);
        assert_eq!(config.passing_average, 50.0);
        Ok(())
    }

    #[test]
    fn test_missing_config() -> Result<()> {
        let dir = tempdir()?;
        assert!(matches!(
            load_grading_config(dir.path()),
            Err(InfrastructureError::ConfigNotFound(_))
        ));
        assert!(matches!(
            load_grading_config(&dir.path().join("nope.yaml")),
            Err(InfrastructureError::ConfigNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let mut config = GradingConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("CURSUS_ROUNDING_MODE", "down"),
                ("CURSUS_DECIMAL_PLACES", "1"),
                ("CURSUS_PASSING_AVERAGE", "12.5"),
            ]),
        )?;
        assert_eq!(config.rounding_mode, RoundingMode::Down);
        assert_eq!(config.decimal_places, 1);
        assert_eq!(config.passing_average, 12.5);
        Ok(())
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = GradingConfig::default();
        let res = apply_env_overrides(&mut config, env(&[("CURSUS_DECIMAL_PLACES", "two")]));
        assert!(matches!(res, Err(InfrastructureError::ConfigError(_))));

        let res = apply_env_overrides(&mut config, env(&[("CURSUS_ROUNDING_MODE", "sideways")]));
        assert!(matches!(res, Err(InfrastructureError::ConfigError(_))));
    }
}
