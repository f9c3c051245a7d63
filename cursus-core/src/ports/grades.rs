// cursus-core/src/ports/grades.rs

// The engine never reads or stores anything itself. These two traits are the
// only boundaries: something hands it raw grades, something keeps the results.

use crate::domain::cohort::{Cohort, CohortReport};
use crate::error::CursusError;

/// Input provider: raw grades and program credits.
pub trait CohortSource {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Cohort, CursusError>;
}

/// Result consumer: persistence, document generation, ...
pub trait ResultSink {
    fn publish(&self, report: &CohortReport) -> Result<(), CursusError>;
}
