// cursus-core/src/domain/grading/engine.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, instrument};

use super::config::{GradingConfig, MissingComponentPolicy, ResolvedWeights};
use super::decision::{Decision, NOT_EVALUATED};
use super::rounding::round_to;
use super::subject::{SubjectGrade, SubjectResult};
use crate::domain::error::{ConfigError, DomainError};

const EQUAL_SPLIT: ResolvedWeights = ResolvedWeights {
    continuous_assessment: 0.5,
    exam: 0.5,
};

/// Fully derived academic result for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentResult {
    pub subjects: Vec<SubjectResult>,
    pub semester_averages: BTreeMap<u32, Option<f64>>,
    pub general_average: Option<f64>,
    pub mention: String,
    pub decision: Decision,
    pub compensated: bool,
    pub credits_earned: f64,
    pub computed_at: DateTime<Utc>,
}

/// Stateless calculator applying a [`GradingConfig`] to raw grades.
///
/// Holds nothing but its configuration, so one engine can serve any number
/// of callers concurrently.
#[derive(Debug, Clone)]
pub struct GradingEngine {
    config: GradingConfig,
}

impl GradingEngine {
    pub fn new(config: GradingConfig) -> Result<Self, ConfigError> {
        config.validate_shape()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    fn round(&self, value: f64) -> f64 {
        round_to(value, self.config.decimal_places, self.config.rounding_mode)
    }

    /// Weights for `subject_type`, falling back to `weight_default`.
    pub fn weights_for(&self, subject_type: &str) -> ResolvedWeights {
        self.config
            .weight_by_subject_type
            .get(subject_type)
            .and_then(|pair| pair.resolve())
            .or_else(|| self.config.weight_default.resolve())
            .unwrap_or(EQUAL_SPLIT)
    }

    pub fn compute_subject_average(
        &self,
        continuous_assessment: Option<f64>,
        exam_grade: Option<f64>,
        subject_type: &str,
    ) -> Option<f64> {
        let weights = self.weights_for(subject_type);
        let renormalize = self.config.missing_component == MissingComponentPolicy::Renormalize;

        let raw = match (continuous_assessment, exam_grade) {
            (None, None) => return None,
            (Some(cc), None) if renormalize => cc,
            (None, Some(exam)) if renormalize => exam,
            (Some(cc), None) => cc * weights.continuous_assessment,
            (None, Some(exam)) => exam * weights.exam,
            (Some(cc), Some(exam)) => cc * weights.continuous_assessment + exam * weights.exam,
        };

        Some(self.round(raw))
    }

    pub fn compute_weighted_total(&self, average: f64, coefficient: f64) -> f64 {
        self.round(average * coefficient)
    }

    /// Coefficient-weighted mean of the subjects of `semester`.
    ///
    /// `None` means "not computable" (no contributing subject), never zero.
    pub fn compute_semester_average(&self, subjects: &[SubjectResult], semester: u32) -> Option<f64> {
        let (weighted_sum, total_coefficient) = subjects
            .iter()
            .filter(|s| s.grade.semester == semester && s.contributes())
            .fold((0.0, 0.0), |(sum, coef), s| {
                let average = s.average.unwrap_or_default();
                (sum + average * s.grade.coefficient, coef + s.grade.coefficient)
            });

        if total_coefficient <= 0.0 {
            return None;
        }
        Some(self.round(weighted_sum / total_coefficient))
    }

    /// Mean of the semester averages; a single missing semester voids the result.
    pub fn compute_general_average(&self, semester_averages: &[Option<f64>]) -> Option<f64> {
        if semester_averages.is_empty() {
            return None;
        }
        let present: Option<Vec<f64>> = semester_averages.iter().copied().collect();
        let present = present?;
        let mean = present.iter().sum::<f64>() / present.len() as f64;
        Some(self.round(mean))
    }

    pub fn check_compensation(&self, general_average: Option<f64>, subjects: &[SubjectResult]) -> bool {
        let Some(general) = general_average else {
            return false;
        };
        if general.is_nan() || general < self.config.passing_average {
            return false;
        }

        let default_floor = self.config.compensation.min_compensable_grade;
        subjects
            .iter()
            .filter(|s| s.grade.is_eliminatory)
            .all(|s| {
                let floor = s.grade.min_eliminatory_grade.unwrap_or(default_floor);
                s.average.is_some_and(|avg| avg >= floor)
            })
    }

    /// Label of the first band, in configured order, containing `average`.
    pub fn assign_mention(&self, average: Option<f64>) -> &str {
        let Some(average) = average else {
            return NOT_EVALUATED;
        };
        self.config
            .mention_bands
            .iter()
            .find(|band| band.contains(average))
            .map(|band| band.label.as_str())
            .unwrap_or(NOT_EVALUATED)
    }

    pub fn decide(&self, general_average: Option<f64>, subjects: &[SubjectResult]) -> Decision {
        if general_average.is_none() {
            return Decision::NotEvaluated;
        }
        if self.check_compensation(general_average, subjects) {
            Decision::Admitted
        } else {
            Decision::Deferred
        }
    }

    /// ECTS credits: full credits from the passing average, a configurable
    /// share of them through compensation, nothing below.
    pub fn compute_credits_earned(
        &self,
        subjects: &[SubjectResult],
        credits_by_subject: &HashMap<String, f64>,
    ) -> f64 {
        let passing = self.config.passing_average;
        let compensation = &self.config.compensation;

        subjects
            .iter()
            .map(|s| {
                let credits = credits_by_subject
                    .get(&s.grade.subject_id)
                    .copied()
                    .unwrap_or_default();
                match s.average {
                    Some(avg) if avg >= passing => credits,
                    Some(avg) if compensation.active && avg >= compensation.min_compensable_grade => {
                        credits * self.config.partial_credit_ratio
                    }
                    _ => 0.0,
                }
            })
            .sum()
    }

    pub fn evaluate_subject(&self, grade: &SubjectGrade) -> SubjectResult {
        let average = self.compute_subject_average(
            grade.continuous_assessment,
            grade.exam_grade,
            &grade.subject_type,
        );
        SubjectResult {
            grade: grade.clone(),
            average,
            weighted_total: average.map(|avg| self.compute_weighted_total(avg, grade.coefficient)),
            mention: self.assign_mention(average).to_string(),
        }
    }

    pub fn process_student_record(
        &self,
        subjects: &[SubjectGrade],
        credits_by_subject: &HashMap<String, f64>,
    ) -> StudentResult {
        self.process_student_record_at(subjects, credits_by_subject, Utc::now())
    }

    /// Same as [`Self::process_student_record`] with an explicit timestamp.
    #[instrument(skip_all, fields(subjects = subjects.len()))]
    pub fn process_student_record_at(
        &self,
        subjects: &[SubjectGrade],
        credits_by_subject: &HashMap<String, f64>,
        computed_at: DateTime<Utc>,
    ) -> StudentResult {
        let evaluated: Vec<SubjectResult> = subjects.iter().map(|g| self.evaluate_subject(g)).collect();

        let semesters: BTreeSet<u32> = if self.config.required_semesters.is_empty() {
            evaluated.iter().map(|s| s.grade.semester).collect()
        } else {
            self.config.required_semesters.iter().copied().collect()
        };

        let semester_averages: BTreeMap<u32, Option<f64>> = semesters
            .iter()
            .map(|&semester| (semester, self.compute_semester_average(&evaluated, semester)))
            .collect();

        let per_semester: Vec<Option<f64>> = semester_averages.values().copied().collect();
        let general_average = self.compute_general_average(&per_semester);
        let compensated = self.check_compensation(general_average, &evaluated);
        let decision = self.decide(general_average, &evaluated);
        let credits_earned = self.compute_credits_earned(&evaluated, credits_by_subject);

        debug!(
            ?general_average,
            %decision,
            credits_earned,
            "Student record processed"
        );

        StudentResult {
            mention: self.assign_mention(general_average).to_string(),
            subjects: evaluated,
            semester_averages,
            general_average,
            decision,
            compensated,
            credits_earned,
            computed_at,
        }
    }

    /// Strict-mode guard: every present score must lie within `[0, default_scale]`.
    ///
    /// None of the computations call this; out-of-range scores are otherwise
    /// used as given.
    pub fn check_scores(&self, subjects: &[SubjectGrade]) -> Result<(), DomainError> {
        let scale = self.config.default_scale;
        for subject in subjects {
            let scores = [
                ("continuous assessment", subject.continuous_assessment),
                ("exam", subject.exam_grade),
            ];
            for (component, score) in scores {
                if let Some(score) = score {
                    if !(0.0..=scale).contains(&score) {
                        return Err(DomainError::ScoreOutOfRange {
                            subject_id: subject.subject_id.clone(),
                            component,
                            score,
                            scale,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
