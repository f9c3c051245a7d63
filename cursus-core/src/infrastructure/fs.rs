use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes a result file atomically: temp file in the target directory, then rename.
///
/// A reader never sees a half-written report. Missing parent directories
/// are created first.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // Same directory as the target so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_missing_directories() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("reports/2026/s3.json");

        atomic_write(&file_path, "{}")?;

        assert_eq!(fs::read_to_string(file_path)?, "{}");
        Ok(())
    }

    #[test]
    fn test_atomic_write_replaces_previous_report() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("report.yaml");

        atomic_write(&file_path, "students: 1")?;
        atomic_write(&file_path, "students: 2")?;

        assert_eq!(fs::read_to_string(&file_path)?, "students: 2");
        let leftovers = fs::read_dir(dir.path())?.count();
        assert_eq!(leftovers, 1, "temporary file left behind");
        Ok(())
    }
}
