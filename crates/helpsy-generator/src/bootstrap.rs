//! Content directory pre-flight check.

use std::{fs, io, path::Path};

use tracing::{debug, info};

/// Conventional scan root for help-center content.
pub const DEFAULT_CONTENT_DIR: &str = "src/data";

/// Ensure the content directory exists before ingestion scans it.
///
/// Creates the directory (and any missing parents) when absent and returns
/// whether a creation happened. Re-running with the directory present
/// performs no filesystem mutation. Filesystem failures propagate and abort
/// the run.
pub fn ensure_content_dir(dir: &Path) -> io::Result<bool> {
    if dir.exists() {
        debug!(dir = %dir.display(), "content directory present");
        return Ok(false);
    }

    info!(dir = %dir.display(), "creating content directory");
    fs::create_dir_all(dir)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let content_dir = dir.path().join("src").join("data");

        let created = ensure_content_dir(&content_dir).expect("bootstrap");
        assert!(created);
        assert!(content_dir.is_dir());
    }

    #[test]
    fn test_rerun_is_a_no_op() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let content_dir = dir.path().join("data");

        assert!(ensure_content_dir(&content_dir).expect("first run"));
        assert!(!ensure_content_dir(&content_dir).expect("second run"));
        assert!(content_dir.is_dir());
    }
}
