// cursus-core/src/infrastructure/adapters/report_file.rs

use std::path::PathBuf;
use tracing::info;

use crate::domain::cohort::CohortReport;
use crate::error::CursusError;
use crate::infrastructure::format::DataFormat;
use crate::infrastructure::fs::atomic_write;
use crate::ports::grades::ResultSink;

/// Writes the cohort report to a JSON or YAML file (format from the extension).
pub struct FileResultSink {
    path: PathBuf,
    format: DataFormat,
}

impl FileResultSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, CursusError> {
        let path = path.into();
        let format = DataFormat::from_path(&path)?;
        Ok(Self { path, format })
    }
}

impl ResultSink for FileResultSink {
    fn publish(&self, report: &CohortReport) -> Result<(), CursusError> {
        let content = self.format.render(report)?;
        atomic_write(&self.path, content)?;
        info!(path = %self.path.display(), outcomes = report.outcomes.len(), "Report written");
        Ok(())
    }
}
