// cursus-core/src/domain/grading/config.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;
use validator::Validate;

use super::rounding::RoundingMode;
use crate::domain::error::ConfigError;

// --- CONFIGURATION STRUCTS ---

/// Share of the subject average taken by continuous assessment and by the final exam.
///
/// Either component may be left out of the file; see [`WeightPair::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeightPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuous_assessment_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_weight: Option<f64>,
}

/// Weights after filling in absent components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeights {
    pub continuous_assessment: f64,
    pub exam: f64,
}

impl WeightPair {
    pub fn new(continuous_assessment_weight: f64, exam_weight: f64) -> Self {
        Self {
            continuous_assessment_weight: Some(continuous_assessment_weight),
            exam_weight: Some(exam_weight),
        }
    }

    /// An absent component takes the complement of the other one (floored at 0).
    /// Returns `None` when both are absent.
    pub fn resolve(&self) -> Option<ResolvedWeights> {
        match (self.continuous_assessment_weight, self.exam_weight) {
            (Some(cc), Some(exam)) => Some(ResolvedWeights {
                continuous_assessment: cc,
                exam,
            }),
            (Some(cc), None) => Some(ResolvedWeights {
                continuous_assessment: cc,
                exam: (1.0 - cc).max(0.0),
            }),
            (None, Some(exam)) => Some(ResolvedWeights {
                continuous_assessment: (1.0 - exam).max(0.0),
                exam,
            }),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MentionBand {
    pub min: f64,
    pub max: f64,
    #[validate(length(min = 1, message = "Mention label cannot be empty"))]
    pub label: String,
}

impl MentionBand {
    pub fn new(min: f64, max: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, average: f64) -> bool {
        self.min <= average && average <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompensationScope {
    IntraSemester,
    InterSemester,
    #[default]
    Annual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationPolicy {
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_min_compensable_grade")]
    pub min_compensable_grade: f64,
    #[serde(default)]
    pub scope: CompensationScope,
}

impl Default for CompensationPolicy {
    fn default() -> Self {
        Self {
            active: true,
            min_compensable_grade: default_min_compensable_grade(),
            scope: CompensationScope::default(),
        }
    }
}

/// What a subject average becomes when only one of CC / exam is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingComponentPolicy {
    /// Present score times its weight; the missing score contributes zero.
    #[default]
    Literal,
    /// Present score alone, as if its weight were 1.
    Renormalize,
}

/// Grading rules applied by [`super::GradingEngine`].
///
/// Fields missing from a file take the scalar defaults of the standard preset
/// (scale 20, pass at 10, 2 decimals, 40/60 weights, compensation from 8), but
/// `weight_by_subject_type` and `mention_bands` default to empty: a file
/// declares its own bands and per-type weights. `GradingConfig::default()` is
/// the full standard preset, bands included; `cursus init` writes it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GradingConfig {
    #[serde(default = "default_scale")]
    pub default_scale: f64,

    #[serde(default = "default_passing_average")]
    pub passing_average: f64,

    #[validate(range(max = 10, message = "At most 10 decimal places are supported"))]
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    #[serde(default)]
    pub rounding_mode: RoundingMode,

    #[serde(default = "default_weights")]
    pub weight_default: WeightPair,

    #[serde(default)]
    pub weight_by_subject_type: BTreeMap<String, WeightPair>,

    #[validate(nested)]
    #[serde(default)]
    pub mention_bands: Vec<MentionBand>,

    #[serde(default)]
    pub compensation: CompensationPolicy,

    #[serde(default)]
    pub missing_component: MissingComponentPolicy,

    #[validate(range(min = 0.0, max = 1.0, message = "Must be a fraction between 0 and 1"))]
    #[serde(default = "default_partial_credit_ratio")]
    pub partial_credit_ratio: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_semesters: Vec<u32>,

    #[serde(default)]
    pub strict_scores: bool,
}

fn default_true() -> bool {
    true
}
fn default_scale() -> f64 {
    20.0
}
fn default_passing_average() -> f64 {
    10.0
}
fn default_decimal_places() -> u32 {
    2
}
fn default_weights() -> WeightPair {
    WeightPair::new(0.4, 0.6)
}
fn default_min_compensable_grade() -> f64 {
    8.0
}
fn default_partial_credit_ratio() -> f64 {
    0.5
}

// --- VALIDATION ---

impl GradingConfig {
    /// Fails fast on a configuration the engine cannot apply consistently.
    ///
    /// Gaps between mention bands and weight pairs that do not add up to 1
    /// are tolerated and only logged.
    pub fn validate_shape(&self) -> Result<(), ConfigError> {
        self.validate()?;

        let scale = self.default_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidScale(scale));
        }

        check_finite("partial_credit_ratio", self.partial_credit_ratio)?;
        check_within_scale("passing_average", self.passing_average, scale)?;
        check_within_scale(
            "compensation.min_compensable_grade",
            self.compensation.min_compensable_grade,
            scale,
        )?;

        check_weights("default", &self.weight_default)?;
        for (subject_type, pair) in &self.weight_by_subject_type {
            check_weights(subject_type, pair)?;
        }

        self.check_mention_bands()
    }

    fn check_mention_bands(&self) -> Result<(), ConfigError> {
        let scale = self.default_scale;

        if self.mention_bands.is_empty() {
            warn!("No mention bands configured: every average will be NOT EVALUATED");
            return Ok(());
        }

        for band in &self.mention_bands {
            check_finite(&format!("mention band '{}' min", band.label), band.min)?;
            check_finite(&format!("mention band '{}' max", band.label), band.max)?;
            if band.min > band.max {
                return Err(ConfigError::InvertedBand {
                    label: band.label.clone(),
                    min: band.min,
                    max: band.max,
                });
            }
            if band.min < 0.0 || band.max > scale {
                return Err(ConfigError::BandOutOfScale {
                    label: band.label.clone(),
                    min: band.min,
                    max: band.max,
                    scale,
                });
            }
        }

        // Overlap check on a sorted copy; the configured order is what assign_mention scans.
        let mut sorted: Vec<&MentionBand> = self.mention_bands.iter().collect();
        sorted.sort_by(|a, b| a.min.total_cmp(&b.min).then(a.max.total_cmp(&b.max)));

        let mut reach = sorted[0];
        if reach.min > 0.0 {
            warn!(
                band = %reach.label,
                "Mention bands leave [0, {}) uncovered",
                reach.min
            );
        }
        for band in sorted.iter().skip(1) {
            if band.min < reach.max {
                return Err(ConfigError::OverlappingBands {
                    first: reach.label.clone(),
                    second: band.label.clone(),
                });
            }
            if band.min > reach.max {
                warn!(
                    "Gap between mention bands '{}' and '{}': ({}, {})",
                    reach.label, band.label, reach.max, band.min
                );
            }
            if band.max >= reach.max {
                reach = band;
            }
        }
        if reach.max < scale {
            warn!("Mention bands leave ({}, {}] uncovered", reach.max, scale);
        }

        Ok(())
    }
}

fn check_within_scale(field: &'static str, value: f64, scale: f64) -> Result<(), ConfigError> {
    if !(0.0..=scale).contains(&value) {
        return Err(ConfigError::ThresholdOutOfScale {
            field,
            value,
            scale,
        });
    }
    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_weights(subject_type: &str, pair: &WeightPair) -> Result<(), ConfigError> {
    let components = [
        ("continuous assessment", pair.continuous_assessment_weight),
        ("exam", pair.exam_weight),
    ];
    for (component, weight) in components {
        if let Some(value) = weight {
            check_finite(&format!("{component} weight for '{subject_type}'"), value)?;
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight {
                    subject_type: subject_type.to_string(),
                    component,
                    value,
                });
            }
        }
    }

    if let Some(resolved) = pair.resolve() {
        let sum = resolved.continuous_assessment + resolved.exam;
        if (sum - 1.0).abs() > 1e-6 {
            warn!(subject_type, sum, "Weight pair does not add up to 1.0");
        }
    }
    Ok(())
}
