//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use patternsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StubError, StubResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StubResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StubResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> StubResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StubError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("src/Repositories");
        let file = nested.join("User.rs");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, "pub struct User;\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "pub struct User;\n");
    }

    #[test]
    fn io_failures_map_to_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope/User.rs");

        let err = LocalFilesystem.write_file(&missing, "x").unwrap_err();
        assert!(matches!(
            err,
            StubError::Application(ApplicationError::FilesystemError { ref path, .. })
                if path == &missing
        ));
        assert!(err.to_string().contains("Failed to write file"));
    }
}
