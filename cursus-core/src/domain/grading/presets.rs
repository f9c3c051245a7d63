// cursus-core/src/domain/grading/presets.rs
//
// Configurations shipped with the engine. `cursus init --preset <name>` writes them out.

use std::collections::BTreeMap;
use std::fmt;

use super::config::{
    CompensationPolicy, CompensationScope, GradingConfig, MentionBand, MissingComponentPolicy,
    WeightPair,
};
use super::rounding::RoundingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Standard,
    DutSecondYear,
}

impl Preset {
    pub fn config(&self) -> GradingConfig {
        match self {
            Self::Standard => GradingConfig::default(),
            Self::DutSecondYear => GradingConfig::dut_second_year(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::DutSecondYear => "dut",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "default" => Ok(Self::Standard),
            "dut" | "dut2" | "dut-second-year" => Ok(Self::DutSecondYear),
            _ => Err(format!("Unknown grading preset: {}", s)),
        }
    }
}

impl Default for GradingConfig {
    /// Generic academic calculator: 40% CC / 60% exam, compensation from 8/20.
    fn default() -> Self {
        Self {
            default_scale: 20.0,
            passing_average: 10.0,
            decimal_places: 2,
            rounding_mode: RoundingMode::Nearest,
            weight_default: WeightPair::new(0.4, 0.6),
            weight_by_subject_type: BTreeMap::from([
                ("practical".to_string(), WeightPair::new(0.6, 0.4)),
                ("project".to_string(), WeightPair::new(1.0, 0.0)),
            ]),
            mention_bands: vec![
                MentionBand::new(16.0, 20.0, "Very Good"),
                MentionBand::new(14.0, 16.0, "Good"),
                MentionBand::new(12.0, 14.0, "Fairly Good"),
                MentionBand::new(10.0, 12.0, "Pass"),
                MentionBand::new(0.0, 10.0, "Fail"),
            ],
            compensation: CompensationPolicy {
                active: true,
                min_compensable_grade: 8.0,
                scope: CompensationScope::Annual,
            },
            missing_component: MissingComponentPolicy::Literal,
            partial_credit_ratio: 0.5,
            required_semesters: Vec::new(),
            strict_scores: false,
        }
    }
}

impl GradingConfig {
    /// DUT second year: semesters 3 and 4, 50/50 weights, eliminatory floor 7/20.
    pub fn dut_second_year() -> Self {
        Self {
            default_scale: 20.0,
            passing_average: 10.0,
            decimal_places: 2,
            rounding_mode: RoundingMode::Nearest,
            weight_default: WeightPair::new(0.5, 0.5),
            weight_by_subject_type: BTreeMap::from([(
                "project".to_string(),
                WeightPair::new(1.0, 0.0),
            )]),
            mention_bands: vec![
                MentionBand::new(16.0, 20.0, "Très Bien"),
                MentionBand::new(14.0, 16.0, "Bien"),
                MentionBand::new(12.0, 14.0, "Assez Bien"),
                MentionBand::new(10.0, 12.0, "Passable"),
                MentionBand::new(0.0, 10.0, "Insuffisant"),
            ],
            compensation: CompensationPolicy {
                active: true,
                min_compensable_grade: 7.0,
                scope: CompensationScope::Annual,
            },
            missing_component: MissingComponentPolicy::Literal,
            partial_credit_ratio: 0.5,
            required_semesters: vec![3, 4],
            strict_scores: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() -> anyhow::Result<()> {
        use std::str::FromStr;
        assert_eq!(
            Preset::from_str("DUT").map_err(|e| anyhow::anyhow!(e))?,
            Preset::DutSecondYear
        );
        assert_eq!(Preset::Standard.to_string(), "standard");
        assert!(Preset::from_str("licence").is_err());
        Ok(())
    }

    #[test]
    fn test_presets_round_trip_through_yaml() -> anyhow::Result<()> {
        for preset in [Preset::Standard, Preset::DutSecondYear] {
            let config = preset.config();
            let yaml = serde_yaml::to_string(&config)?;
            let back: GradingConfig = serde_yaml::from_str(&yaml)?;
            assert_eq!(back, config);
        }
        Ok(())
    }
}
