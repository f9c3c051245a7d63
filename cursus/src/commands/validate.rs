// cursus/src/commands/validate.rs
//
// USE CASE: Check a grading configuration before using it for a jury.

use std::path::PathBuf;

use comfy_table::Table;

use super::load_engine;

pub fn execute(config_path: PathBuf) -> anyhow::Result<()> {
    println!("🔍 Validating grading configuration...");

    // Exits with code 1 and a miette report when the config is malformed
    let engine = load_engine(&config_path)?;
    let config = engine.config();

    println!(
        "   Scale: {} | Passing average: {} | Rounding: {} ({} decimals)",
        config.default_scale, config.passing_average, config.rounding_mode, config.decimal_places
    );

    let compensation = &config.compensation;
    if compensation.active {
        println!(
            "   Compensation: active from {} ({:?}), partial credits x{}",
            compensation.min_compensable_grade, compensation.scope, config.partial_credit_ratio
        );
    } else {
        println!("   Compensation: inactive");
    }

    if !config.required_semesters.is_empty() {
        println!("   Required semesters: {:?}", config.required_semesters);
    }

    let mut bands = Table::new();
    bands.set_header(vec!["Mention", "Min", "Max"]);
    for band in &config.mention_bands {
        bands.add_row(vec![
            band.label.clone(),
            band.min.to_string(),
            band.max.to_string(),
        ]);
    }
    println!("{bands}");

    println!("✅ Configuration is valid.");
    Ok(())
}
