//! Data file location
//!
//! When no path is configured, a fixed list of candidates is probed and the
//! first one that exists wins. If none exists the first candidate is used, so
//! a fresh install writes its data under the working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Relative location of the data file inside a data root
pub const DATA_FILE: &str = "data/data.json";

/// Candidate data file paths, in preference order
pub fn candidate_paths(cwd: &Path, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![
        cwd.join(DATA_FILE),
        cwd.join("car-rental").join(DATA_FILE),
        cwd.join("..").join("car-rental").join(DATA_FILE),
    ];
    if let Some(dir) = exe_dir {
        candidates.push(dir.join(DATA_FILE));
    }
    candidates
}

/// First existing candidate, else the first candidate
pub fn pick_candidate(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|p| p.exists())
        .or_else(|| candidates.first())
        .cloned()
}

/// Resolve the data file path
///
/// An explicit path is used as-is.
pub fn resolve_data_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using configured data path");
        return path;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let candidates = candidate_paths(&cwd, exe_dir.as_deref());
    let path = pick_candidate(&candidates).unwrap_or_else(|| cwd.join(DATA_FILE));
    debug!(path = %path.display(), "resolved data path from candidates");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_candidate_order() {
        let cwd = Path::new("/srv/app");
        let exe = Path::new("/opt/bin");
        let candidates = candidate_paths(cwd, Some(exe));
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0], PathBuf::from("/srv/app/data/data.json"));
        assert_eq!(candidates[3], PathBuf::from("/opt/bin/data/data.json"));
    }

    #[test]
    fn test_pick_first_existing() {
        let dir = tempdir().unwrap();
        let candidates = candidate_paths(dir.path(), None);
        fs::create_dir_all(candidates[1].parent().unwrap()).unwrap();
        fs::write(&candidates[1], "{}").unwrap();

        assert_eq!(pick_candidate(&candidates), Some(candidates[1].clone()));
    }

    #[test]
    fn test_pick_defaults_to_first() {
        let dir = tempdir().unwrap();
        let candidates = candidate_paths(dir.path(), None);
        assert_eq!(pick_candidate(&candidates), Some(candidates[0].clone()));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom/rental.json");
        assert_eq!(resolve_data_path(Some(path.clone())), path);
    }
}
