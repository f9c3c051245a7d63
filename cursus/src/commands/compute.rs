// cursus/src/commands/compute.rs
//
// USE CASE: One-off subject average, handy to check a weighting before a jury.

use std::path::PathBuf;

use super::{format_average, load_engine};

pub fn execute(
    config_path: PathBuf,
    cc: Option<f64>,
    exam: Option<f64>,
    subject_type: String,
) -> anyhow::Result<()> {
    let engine = load_engine(&config_path)?;
    let decimals = engine.config().decimal_places;

    let weights = engine.weights_for(&subject_type);
    let average = engine.compute_subject_average(cc, exam, &subject_type);

    println!("subject type: {}", subject_type);
    println!(
        "weights: cc {:.2} / exam {:.2}",
        weights.continuous_assessment, weights.exam
    );
    println!("average: {}", format_average(average, decimals));
    println!("mention: {}", engine.assign_mention(average));

    Ok(())
}
