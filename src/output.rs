use crate::results::PageRecord;
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error writing crawl output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write one seed's complete record set to `<root>/<host>/output.json`,
/// creating directories as needed. Returns the path written.
pub fn write_records(
    root: &Path,
    seed_url: &str,
    records: &[PageRecord],
) -> Result<PathBuf, OutputError> {
    let dir = root.join(utils::seed_dir_name(seed_url));
    fs::create_dir_all(&dir)?;

    let path = dir.join("output.json");
    let payload = serde_json::to_string_pretty(records)?;
    fs::write(&path, payload)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_records_under_host_directory() {
        let root = tempfile::tempdir().unwrap();
        let records = vec![PageRecord::new(
            "A".to_string(),
            "https://a.test/".to_string(),
            "Hello".to_string(),
        )];

        let path = write_records(root.path(), "https://a.test/", &records).unwrap();

        assert_eq!(path, root.path().join("a.test").join("output.json"));
        let written: Vec<PageRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].url, "https://a.test/");
        assert_eq!(written[0].data, "Hello");
    }

    #[test]
    fn test_empty_result_set_still_writes_a_file() {
        let root = tempfile::tempdir().unwrap();

        let path = write_records(root.path(), "https://dead.test/", &[]).unwrap();

        let written: Vec<PageRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written.is_empty());
    }

    #[test]
    fn test_unparseable_seed_falls_back_to_sanitized_name() {
        let root = tempfile::tempdir().unwrap();

        let path = write_records(root.path(), "nonsense", &[]).unwrap();

        assert_eq!(path, root.path().join("nonsense").join("output.json"));
    }
}
