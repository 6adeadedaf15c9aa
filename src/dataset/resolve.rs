// src/dataset/resolve.rs
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// First candidate (in list order) that names an existing regular file
/// under `base_dir`. Directories with a matching name are skipped.
pub fn resolve(candidates: &[String], base_dir: &Path) -> Result<PathBuf> {
    for name in candidates {
        let path = base_dir.join(name);
        if path.is_file() {
            logd!("Resolve: using {}", path.display());
            return Ok(path);
        }
    }
    Err(Error::DatasetNotFound {
        candidates: candidates.to_vec(),
        base_dir: base_dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn earliest_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "q,a\n").unwrap();
        fs::write(dir.path().join("c.csv"), "q,a\n").unwrap();
        let names = strings!["a.csv", "b.csv", "c.csv"];
        assert_eq!(resolve(&names, dir.path()).unwrap(), dir.path().join("b.csv"));
    }

    #[test]
    fn directories_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a.csv")).unwrap();
        let err = resolve(&strings!["a.csv"], dir.path()).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { ref candidates, .. } if candidates.len() == 1));
    }
}
