//! Scoped tracking of intermediate files
//!
//! Every path registered with [`TempArtifacts`] is removed when the guard is
//! dropped, on both the success and the error path.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct TempArtifacts {
    paths: Vec<PathBuf>,
}

impl TempArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path for removal; call before the file is created.
    pub fn track(&mut self, path: impl Into<PathBuf>) -> PathBuf {
        let path = path.into();
        self.paths.push(path.clone());
        path
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Remove every tracked file that exists. Returns how many were deleted.
    pub fn cleanup(&mut self) -> usize {
        let mut removed = 0;

        for path in self.paths.drain(..) {
            if !path.exists() {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!("Removed {:?}", path);
                    removed += 1;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!("Failed to remove {:?}: {}", path, e),
            }
        }

        removed
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_removes_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let kept = dir.path().join("fixture.mp3");
        fs::write(&kept, b"keep").unwrap();

        {
            let mut artifacts = TempArtifacts::new();
            for name in ["temp_line_00.mp3", "temp_line_01.mp3", "filelist.txt"] {
                let path = artifacts.track(dir.path().join(name));
                fs::write(&path, b"x").unwrap();
            }
            // Registered but never created
            artifacts.track(dir.path().join("temp_line_02.mp3"));
            assert_eq!(artifacts.len(), 4);
        }

        let left: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(left, ["fixture.mp3"]);
    }

    #[test]
    fn test_cleanup_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut artifacts = TempArtifacts::new();
        let path = artifacts.track(dir.path().join("gone.mp3"));
        fs::write(&path, b"x").unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(artifacts.cleanup(), 0);
        assert!(artifacts.is_empty());
    }
}
