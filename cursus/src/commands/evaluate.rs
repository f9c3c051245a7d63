// cursus/src/commands/evaluate.rs
//
// USE CASE: Grade a cohort and print / store the jury report.

use std::path::PathBuf;

use comfy_table::Table;
use cursus_core::application::{evaluate_cohort, run_evaluation};
use cursus_core::domain::cohort::CohortReport;
use cursus_core::infrastructure::adapters::{FileCohortSource, FileResultSink};
use cursus_core::infrastructure::format::DataFormat;
use cursus_core::ports::CohortSource;

use super::{format_average, load_engine};
use crate::cli::OutputFormat;

pub fn execute(
    config_path: PathBuf,
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Engine from config (Infra + Domain)
    let engine = load_engine(&config_path)?;
    let source = FileCohortSource::new(&input);

    // B. Evaluate, publishing through the file sink when --output is given
    let result = match &output {
        Some(path) => {
            let sink = FileResultSink::new(path)?;
            run_evaluation(&source, &engine, &sink)
        }
        None => source
            .load()
            .and_then(|cohort| evaluate_cohort(&engine, &cohort)),
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("\n💥 EVALUATION FAILED: {}", e);
            std::process::exit(1);
        }
    };

    // C. Console output
    let decimals = engine.config().decimal_places;
    match format {
        OutputFormat::Table => print_table(&report, decimals),
        OutputFormat::Json => println!("{}", DataFormat::Json.render(&report)?),
        OutputFormat::Yaml => print!("{}", DataFormat::Yaml.render(&report)?),
    }

    if let Some(path) = output {
        eprintln!("📄 Report saved to {}", path.display());
    }
    eprintln!("✨ Evaluated in {:.2?}", start.elapsed());

    Ok(())
}

fn print_table(report: &CohortReport, decimals: u32) {
    let mut table = Table::new();
    table.set_header(vec!["Student", "General average", "Mention", "Decision", "ECTS"]);

    for outcome in &report.outcomes {
        let result = &outcome.result;
        let student = match &outcome.full_name {
            Some(name) => format!("{} ({})", outcome.student_id, name),
            None => outcome.student_id.clone(),
        };
        table.add_row(vec![
            student,
            format_average(result.general_average, decimals),
            result.mention.clone(),
            result.decision.to_string(),
            format!("{}", result.credits_earned),
        ]);
    }
    println!("{table}");

    let summary = &report.summary;
    println!("\n📊 Cohort Summary:");
    println!("   Students: {}", summary.students);
    println!(
        "   Admitted: {} | Deferred: {} | Not evaluated: {}",
        summary.admitted, summary.deferred, summary.not_evaluated
    );
    println!(
        "   Class average: {}",
        format_average(summary.class_average, decimals)
    );
    if let Some(rate) = summary.pass_rate {
        println!("   Pass rate: {:.1}%", rate * 100.0);
    }
}
