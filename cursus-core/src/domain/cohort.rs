// cursus-core/src/domain/cohort.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::grading::{StudentResult, SubjectGrade};

/// Raw grades of one student, as supplied by the input provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentRecord {
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub subjects: Vec<SubjectGrade>,
    /// Per-student ECTS overrides, merged over the program credits.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub credits: HashMap<String, f64>,
}

/// A group of students graded under the same program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Cohort {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    /// ECTS credits per subject id.
    #[serde(default)]
    pub credits: HashMap<String, f64>,
}

impl Cohort {
    /// Program credits with the student's own overrides applied.
    pub fn credits_for(&self, student: &StudentRecord) -> HashMap<String, f64> {
        let mut credits = self.credits.clone();
        credits.extend(student.credits.iter().map(|(k, v)| (k.clone(), *v)));
        credits
    }

    /// Appends another cohort; its program credits win on conflicting subjects.
    pub fn merge(&mut self, other: Cohort) {
        self.students.extend(other.students);
        self.credits.extend(other.credits);
    }
}

// --- RESULTS ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentOutcome {
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub result: StudentResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CohortSummary {
    pub students: usize,
    pub admitted: usize,
    pub deferred: usize,
    pub not_evaluated: usize,
    pub class_average: Option<f64>,
    /// Admitted over evaluated students (NOT EVALUATED excluded).
    pub pass_rate: Option<f64>,
    pub best_average: Option<f64>,
    pub worst_average: Option<f64>,
}

/// Everything handed to the result consumer after a cohort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortReport {
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<StudentOutcome>,
    pub summary: CohortSummary,
}
