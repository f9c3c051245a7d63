// cursus-core/src/application/evaluation.rs

use chrono::Utc;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::domain::cohort::{Cohort, CohortReport, CohortSummary, StudentOutcome};
use crate::domain::error::DomainError;
use crate::domain::grading::{Decision, GradingEngine, round_to};
use crate::error::CursusError;
use crate::ports::grades::{CohortSource, ResultSink};

/// Grades every student of the cohort and summarises the jury outcome.
///
/// With `strict_scores` set, the first out-of-range score aborts the run.
#[instrument(skip_all, fields(students = cohort.students.len()))]
pub fn evaluate_cohort(engine: &GradingEngine, cohort: &Cohort) -> Result<CohortReport, CursusError> {
    if cohort.students.is_empty() {
        return Err(DomainError::EmptyCohort.into());
    }

    let generated_at = Utc::now();
    let strict = engine.config().strict_scores;

    let mut outcomes = Vec::with_capacity(cohort.students.len());
    for student in &cohort.students {
        if strict {
            engine.check_scores(&student.subjects)?;
        }
        if student.subjects.is_empty() {
            warn!(student = %student.student_id, "Student has no subjects");
        }

        let credits = cohort.credits_for(student);
        let result = engine.process_student_record_at(&student.subjects, &credits, generated_at);
        outcomes.push(StudentOutcome {
            student_id: student.student_id.clone(),
            full_name: student.full_name.clone(),
            result,
        });
    }

    let summary = summarize(engine, &outcomes);
    info!(
        admitted = summary.admitted,
        deferred = summary.deferred,
        not_evaluated = summary.not_evaluated,
        "Cohort evaluated"
    );

    Ok(CohortReport {
        generated_at,
        outcomes,
        summary,
    })
}

pub fn summarize(engine: &GradingEngine, outcomes: &[StudentOutcome]) -> CohortSummary {
    let config = engine.config();
    let round = |value: f64| round_to(value, config.decimal_places, config.rounding_mode);

    let count = |decision: Decision| {
        outcomes
            .iter()
            .filter(|o| o.result.decision == decision)
            .count()
    };
    let admitted = count(Decision::Admitted);
    let deferred = count(Decision::Deferred);
    let not_evaluated = count(Decision::NotEvaluated);

    let averages: Vec<f64> = outcomes
        .iter()
        .filter_map(|o| o.result.general_average)
        .collect();

    let class_average = if averages.is_empty() {
        None
    } else {
        Some(round(averages.iter().sum::<f64>() / averages.len() as f64))
    };

    let evaluated = admitted + deferred;
    let pass_rate = if evaluated == 0 {
        None
    } else {
        // A ratio in [0, 1]; grade rounding does not apply
        Some(admitted as f64 / evaluated as f64)
    };

    CohortSummary {
        students: outcomes.len(),
        admitted,
        deferred,
        not_evaluated,
        class_average,
        pass_rate,
        best_average: averages.iter().copied().reduce(f64::max),
        worst_average: averages.iter().copied().reduce(f64::min),
    }
}

/// Load -> Evaluate -> Publish, through the ports.
pub fn run_evaluation(
    source: &dyn CohortSource,
    engine: &GradingEngine,
    sink: &dyn ResultSink,
) -> Result<CohortReport, CursusError> {
    let start = Instant::now();
    info!(source = %source.describe(), "Starting cohort evaluation");

    let cohort = source.load()?;
    let report = evaluate_cohort(engine, &cohort)?;
    sink.publish(&report)?;

    info!("Cohort evaluation finished in {:.2?}", start.elapsed());
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::cohort::StudentRecord;
    use crate::domain::grading::{GradingConfig, RoundingMode, SubjectGrade};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- MOCK PORTS ---
    struct MemorySource(Cohort);

    impl CohortSource for MemorySource {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        fn load(&self) -> Result<Cohort, CursusError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Clone, Default)]
    struct MemorySink {
        published: Arc<Mutex<Vec<CohortReport>>>,
    }

    impl ResultSink for MemorySink {
        fn publish(&self, report: &CohortReport) -> Result<(), CursusError> {
            self.published.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    fn student(id: &str, law: (f64, f64), eco: (f64, f64)) -> StudentRecord {
        StudentRecord {
            student_id: id.to_string(),
            full_name: None,
            subjects: vec![
                SubjectGrade::new("LAW", 4.0, 3)
                    .with_scores(Some(law.0), Some(law.1))
                    .eliminatory(Some(7.0)),
                SubjectGrade::new("ECO", 4.0, 4).with_scores(Some(eco.0), Some(eco.1)),
            ],
            credits: HashMap::new(),
        }
    }

    fn cohort() -> Cohort {
        Cohort {
            students: vec![
                student("E1", (12.0, 8.0), (14.0, 14.0)), // 10 / 14 -> 12, admitted
                student("E2", (6.0, 6.0), (16.0, 16.0)),  // 6 / 16 -> 11, eliminated on LAW
                StudentRecord {
                    student_id: "E3".to_string(),
                    full_name: Some("Absent Student".to_string()),
                    subjects: vec![SubjectGrade::new("LAW", 4.0, 3)],
                    credits: HashMap::new(),
                },
            ],
            credits: HashMap::from([("LAW".to_string(), 6.0), ("ECO".to_string(), 6.0)]),
        }
    }

    fn engine() -> GradingEngine {
        GradingEngine::new(GradingConfig::dut_second_year()).unwrap()
    }

    #[test]
    fn test_evaluate_cohort_outcomes_and_summary() -> anyhow::Result<()> {
        let report = evaluate_cohort(&engine(), &cohort())?;

        let decisions: Vec<Decision> = report.outcomes.iter().map(|o| o.result.decision).collect();
        assert_eq!(
            decisions,
            vec![Decision::Admitted, Decision::Deferred, Decision::NotEvaluated]
        );

        let summary = &report.summary;
        assert_eq!(summary.students, 3);
        assert_eq!(summary.admitted, 1);
        assert_eq!(summary.deferred, 1);
        assert_eq!(summary.not_evaluated, 1);
        assert_eq!(summary.class_average, Some(11.5));
        assert_eq!(summary.pass_rate, Some(0.5));
        assert_eq!(summary.best_average, Some(12.0));
        assert_eq!(summary.worst_average, Some(11.0));

        // E2 keeps full ECO credits, gets nothing for LAW (6 < 7)
        assert_eq!(report.outcomes[1].result.credits_earned, 6.0);
        assert!(report.outcomes.iter().all(|o| o.result.computed_at == report.generated_at));
        Ok(())
    }

    #[test]
    fn test_student_credit_override_is_used() -> anyhow::Result<()> {
        let mut cohort = cohort();
        cohort.students[0].credits.insert("LAW".to_string(), 10.0);
        let report = evaluate_cohort(&engine(), &cohort)?;
        assert_eq!(report.outcomes[0].result.credits_earned, 16.0);
        Ok(())
    }

    #[test]
    fn test_empty_cohort_is_rejected() {
        let res = evaluate_cohort(&engine(), &Cohort::default());
        assert!(matches!(
            res,
            Err(CursusError::Domain(DomainError::EmptyCohort))
        ));
    }

    #[test]
    fn test_strict_mode_rejects_out_of_range_scores() {
        let mut config = GradingConfig::dut_second_year();
        config.strict_scores = true;
        let engine = GradingEngine::new(config).unwrap();

        let mut cohort = cohort();
        cohort.students[1].subjects[1].exam_grade = Some(22.0);

        let res = evaluate_cohort(&engine, &cohort);
        assert!(matches!(
            res,
            Err(CursusError::Domain(DomainError::ScoreOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_lenient_mode_keeps_out_of_range_scores() -> anyhow::Result<()> {
        let mut cohort = cohort();
        cohort.students[0].subjects[1].exam_grade = Some(22.0);
        let report = evaluate_cohort(&engine(), &cohort)?;
        // ECO: 14 * 0.5 + 22 * 0.5 = 18
        assert_eq!(report.outcomes[0].result.semester_averages.get(&4), Some(&Some(18.0)));
        Ok(())
    }

    #[test]
    fn test_pass_rate_ignores_grade_precision() -> anyhow::Result<()> {
        let mut config = GradingConfig::dut_second_year();
        config.decimal_places = 0;
        config.rounding_mode = RoundingMode::Up;
        let engine = GradingEngine::new(config)?;

        let mut cohort = cohort();
        let report = evaluate_cohort(&engine, &cohort)?;
        assert_eq!(report.summary.pass_rate, Some(0.5));

        // One admitted out of three evaluated
        let mut twin = cohort.students[1].clone();
        twin.student_id = "E2-bis".to_string();
        cohort.students.push(twin);
        let report = evaluate_cohort(&engine, &cohort)?;
        assert_eq!(report.summary.deferred, 2);
        let rate = report.summary.pass_rate.unwrap();
        assert!((rate - 1.0 / 3.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_summary_without_evaluated_students() {
        let summary = summarize(&engine(), &[]);
        assert_eq!(summary.students, 0);
        assert_eq!(summary.class_average, None);
        assert_eq!(summary.pass_rate, None);
        assert_eq!(summary.best_average, None);
    }

    #[test]
    fn test_run_evaluation_publishes_report() -> anyhow::Result<()> {
        let sink = MemorySink::default();
        let report = run_evaluation(&MemorySource(cohort()), &engine(), &sink)?;

        let published = sink.published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0], report);
        Ok(())
    }
}
