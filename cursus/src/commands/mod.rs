// cursus/src/commands/mod.rs

pub mod compute;
pub mod evaluate;
pub mod init;
pub mod validate;

use anyhow::Context;
use std::path::Path;

use cursus_core::GradingEngine;
use cursus_core::infrastructure::config::load_grading_config;

/// Config file -> validated engine. Invalid configurations are rendered with miette and exit 1.
pub(crate) fn load_engine(config_path: &Path) -> anyhow::Result<GradingEngine> {
    let config = load_grading_config(config_path).with_context(|| {
        format!(
            "Failed to load grading configuration from {:?}",
            config_path
        )
    })?;

    match GradingEngine::new(config) {
        Ok(engine) => Ok(engine),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}

pub(crate) fn format_average(average: Option<f64>, decimals: u32) -> String {
    match average {
        Some(avg) => format!("{:.*}", decimals as usize, avg),
        None => "-".to_string(),
    }
}
