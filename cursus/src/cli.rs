// cursus/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cursus")]
#[command(about = "Academic results engine: averages, compensation, mentions and ECTS", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🎓 Computes the results of a cohort (grades -> averages -> jury decision)
    Evaluate {
        /// Grading configuration file, or a directory containing cursus.yaml
        #[arg(long, short, default_value = ".", env = "CURSUS_CONFIG")]
        config: PathBuf,

        /// Cohort file, or a directory of cohort files
        #[arg(long, short)]
        input: PathBuf,

        /// Write the full report to this file (.json, .yaml or .yml)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Console output
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 🧮 Computes a single subject average
    Compute {
        #[arg(long, short, default_value = ".", env = "CURSUS_CONFIG")]
        config: PathBuf,

        /// Continuous assessment score
        #[arg(long)]
        cc: Option<f64>,

        /// Final exam score
        #[arg(long)]
        exam: Option<f64>,

        /// Subject type used to pick the weights
        #[arg(long, default_value = "default")]
        subject_type: String,
    },

    /// ✅ Validates a grading configuration
    Validate {
        #[arg(long, short, default_value = ".", env = "CURSUS_CONFIG")]
        config: PathBuf,
    },

    /// 📝 Writes a preset grading configuration (standard | dut)
    Init {
        #[arg(long, default_value = "standard")]
        preset: String,

        #[arg(long, short, default_value = "cursus.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long, default_value = "false")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_evaluate_defaults() -> Result<()> {
        let args = Cli::parse_from(["cursus", "evaluate", "--input", "cohort.yaml"]);
        match args.command {
            Commands::Evaluate {
                config,
                input,
                output,
                format,
            } => {
                assert_eq!(config.to_string_lossy(), ".");
                assert_eq!(input.to_string_lossy(), "cohort.yaml");
                assert_eq!(output, None);
                assert_eq!(format, OutputFormat::Table);
                Ok(())
            }
            _ => bail!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_cli_parse_evaluate_json_output() -> Result<()> {
        let args = Cli::parse_from([
            "cursus",
            "evaluate",
            "-c",
            "rules/dut.yaml",
            "-i",
            "grades/",
            "-o",
            "out/report.json",
            "--format",
            "json",
        ]);
        match args.command {
            Commands::Evaluate {
                config,
                output,
                format,
                ..
            } => {
                assert_eq!(config.to_string_lossy(), "rules/dut.yaml");
                assert_eq!(output, Some(PathBuf::from("out/report.json")));
                assert_eq!(format, OutputFormat::Json);
                Ok(())
            }
            _ => bail!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_cli_parse_compute() -> Result<()> {
        let args = Cli::parse_from(["cursus", "compute", "--cc", "12", "--subject-type", "project"]);
        match args.command {
            Commands::Compute {
                cc,
                exam,
                subject_type,
                ..
            } => {
                assert_eq!(cc, Some(12.0));
                assert_eq!(exam, None);
                assert_eq!(subject_type, "project");
                Ok(())
            }
            _ => bail!("Expected Compute command"),
        }
    }

    #[test]
    fn test_cli_parse_init() -> Result<()> {
        let args = Cli::parse_from(["cursus", "init", "--preset", "dut", "--force"]);
        match args.command {
            Commands::Init {
                preset,
                output,
                force,
            } => {
                assert_eq!(preset, "dut");
                assert_eq!(output.to_string_lossy(), "cursus.yaml");
                assert!(force);
                Ok(())
            }
            _ => bail!("Expected Init command"),
        }
    }
}
