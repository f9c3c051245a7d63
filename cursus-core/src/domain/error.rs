// cursus-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// Malformed or inconsistent grading configuration, raised when the engine is built.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid grading configuration: {0}")]
    #[diagnostic(
        code(cursus::config::fields),
        help("Check numeric ranges (decimal_places <= 10, partial_credit_ratio in [0, 1]).")
    )]
    Fields(#[from] validator::ValidationErrors),

    #[error("Grading scale must be a positive number, got {0}")]
    #[diagnostic(code(cursus::config::scale))]
    InvalidScale(f64),

    #[error("{field} ({value}) is outside the grading scale [0, {scale}]")]
    #[diagnostic(code(cursus::config::out_of_scale))]
    ThresholdOutOfScale {
        field: &'static str,
        value: f64,
        scale: f64,
    },

    #[error("{field} must be a finite number, got {value}")]
    #[diagnostic(
        code(cursus::config::not_finite),
        help("NaN and infinity are not valid weights, bounds or ratios.")
    )]
    NotFinite { field: String, value: f64 },

    #[error("Negative {component} weight ({value}) for subject type '{subject_type}'")]
    #[diagnostic(
        code(cursus::config::weight),
        help("Weights are fractions of the subject average, e.g. 0.4 / 0.6.")
    )]
    NegativeWeight {
        subject_type: String,
        component: &'static str,
        value: f64,
    },

    #[error("Mention band '{label}' has min {min} greater than max {max}")]
    #[diagnostic(code(cursus::config::band_inverted))]
    InvertedBand { label: String, min: f64, max: f64 },

    #[error("Mention band '{label}' [{min}, {max}] falls outside the grading scale [0, {scale}]")]
    #[diagnostic(code(cursus::config::band_scale))]
    BandOutOfScale {
        label: String,
        min: f64,
        max: f64,
        scale: f64,
    },

    #[error("Mention bands '{first}' and '{second}' overlap")]
    #[diagnostic(
        code(cursus::config::band_overlap),
        help("Bands may share an endpoint but must not overlap; the first band listed wins on a shared endpoint.")
    )]
    OverlappingBands { first: String, second: String },
}

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "Score {score} for subject '{subject_id}' ({component}) is outside the grading scale [0, {scale}]"
    )]
    #[diagnostic(
        code(cursus::domain::score_range),
        help("Strict mode is enabled (strict_scores: true). Fix the input or disable strict mode.")
    )]
    ScoreOutOfRange {
        subject_id: String,
        component: &'static str,
        score: f64,
        scale: f64,
    },

    #[error("Cohort contains no students")]
    #[diagnostic(code(cursus::domain::empty_cohort))]
    EmptyCohort,
}
