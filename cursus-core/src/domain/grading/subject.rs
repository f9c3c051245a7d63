// cursus-core/src/domain/grading/subject.rs

use serde::{Deserialize, Serialize};

/// Raw grades of one subject for one evaluation period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectGrade {
    pub subject_id: String,
    #[serde(default)]
    pub continuous_assessment: Option<f64>,
    #[serde(default)]
    pub exam_grade: Option<f64>,
    pub coefficient: f64,
    #[serde(default = "default_subject_type")]
    pub subject_type: String,
    #[serde(default)]
    pub is_eliminatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_eliminatory_grade: Option<f64>,
    pub semester: u32,
}

fn default_subject_type() -> String {
    "default".to_string()
}

impl SubjectGrade {
    pub fn new(subject_id: impl Into<String>, coefficient: f64, semester: u32) -> Self {
        Self {
            subject_id: subject_id.into(),
            continuous_assessment: None,
            exam_grade: None,
            coefficient,
            subject_type: default_subject_type(),
            is_eliminatory: false,
            min_eliminatory_grade: None,
            semester,
        }
    }

    pub fn with_scores(mut self, continuous_assessment: Option<f64>, exam_grade: Option<f64>) -> Self {
        self.continuous_assessment = continuous_assessment;
        self.exam_grade = exam_grade;
        self
    }

    pub fn with_type(mut self, subject_type: impl Into<String>) -> Self {
        self.subject_type = subject_type.into();
        self
    }

    /// Marks the subject eliminatory; `None` falls back to the compensation floor.
    pub fn eliminatory(mut self, min_grade: Option<f64>) -> Self {
        self.is_eliminatory = true;
        self.min_eliminatory_grade = min_grade;
        self
    }
}

/// A subject once the engine has derived its average, weighted total and mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    #[serde(flatten)]
    pub grade: SubjectGrade,
    pub average: Option<f64>,
    pub weighted_total: Option<f64>,
    pub mention: String,
}

impl SubjectResult {
    /// Counts towards weighted averages: has an average and a positive coefficient.
    pub fn contributes(&self) -> bool {
        self.average.is_some() && self.grade.coefficient > 0.0
    }
}
