// cursus/src/commands/init.rs
//
// USE CASE: Scaffold a grading configuration from a preset.

use std::path::PathBuf;
use std::str::FromStr;

use cursus_core::domain::grading::Preset;
use cursus_core::infrastructure::format::DataFormat;
use cursus_core::infrastructure::fs::atomic_write;

pub fn execute(preset: String, output: PathBuf, force: bool) -> anyhow::Result<()> {
    let preset = Preset::from_str(&preset).map_err(|e| anyhow::anyhow!(e))?;

    if output.exists() && !force {
        anyhow::bail!(
            "❌ {} already exists.\n👉 Use --force to overwrite it.",
            output.display()
        );
    }

    let format = DataFormat::from_path(&output)?;
    let content = format.render(&preset.config())?;
    atomic_write(&output, content)?;

    println!("✨ Preset '{}' written to {}", preset, output.display());
    Ok(())
}
