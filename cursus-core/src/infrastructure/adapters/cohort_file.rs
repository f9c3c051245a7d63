// cursus-core/src/infrastructure/adapters/cohort_file.rs

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::domain::cohort::Cohort;
use crate::error::CursusError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::format::load_document;
use crate::ports::grades::CohortSource;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Reads a cohort from one file, or from every cohort file under a directory.
pub struct FileCohortSource {
    root: PathBuf,
}

impl FileCohortSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Cohort files under the root, sorted by path so the student order is stable.
    pub fn discover(&self) -> Result<Vec<PathBuf>, InfrastructureError> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }
        if !self.root.exists() {
            return Err(InfrastructureError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Cohort input {:?} does not exist", self.root),
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|e| InfrastructureError::Io(std::io::Error::other(e)))?;
            if entry.file_type().is_file() && is_cohort_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(InfrastructureError::NoInput(self.root.display().to_string()));
        }
        Ok(files)
    }
}

fn is_cohort_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

impl CohortSource for FileCohortSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self) -> Result<Cohort, CursusError> {
        let mut cohort = Cohort::default();
        for path in self.discover()? {
            let part: Cohort = load_document(&path)?;
            debug!(path = %path.display(), students = part.students.len(), "Cohort file loaded");
            cohort.merge(part);
        }
        info!(students = cohort.students.len(), "Cohort loaded");
        Ok(cohort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    const GROUP_A: &str = r#"
credits:
  LAW: 4
students:
  - student_id: A1
    subjects:
      - subject_id: LAW
        continuous_assessment: 12
        exam_grade: 8
        coefficient: 4
        semester: 3
"#;

    const GROUP_B: &str = r#"{
  "credits": {"ECO": 5},
  "students": [
    {"student_id": "B1", "subjects": []},
    {"student_id": "B2", "full_name": "Jo Martin", "subjects": []}
  ]
}"#;

    #[test]
    fn test_loads_single_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("group_a.yaml");
        fs::write(&path, GROUP_A)?;

        let cohort = FileCohortSource::new(&path).load()?;
        assert_eq!(cohort.students.len(), 1);
        assert_eq!(cohort.students[0].subjects[0].exam_grade, Some(8.0));
        Ok(())
    }

    #[test]
    fn test_walks_directory_in_path_order() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("nested"))?;
        fs::write(dir.path().join("nested/b.json"), GROUP_B)?;
        fs::write(dir.path().join("a.yml"), GROUP_A)?;
        fs::write(dir.path().join("notes.txt"), "ignored")?;

        let cohort = FileCohortSource::new(dir.path()).load()?;
        let ids: Vec<&str> = cohort.students.iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "B1", "B2"]);
        assert_eq!(cohort.credits.len(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_directory_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let res = FileCohortSource::new(dir.path()).discover();
        assert!(matches!(res, Err(InfrastructureError::NoInput(_))));
        Ok(())
    }

    #[test]
    fn test_missing_input_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let res = FileCohortSource::new(dir.path().join("absent")).load();
        assert!(matches!(
            res,
            Err(CursusError::Infrastructure(InfrastructureError::Io(_)))
        ));
        Ok(())
    }
}
