//! Directory-backed template overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use patternsmith_core::{
    application::ports::{TemplateOrigin, TemplateStore},
    domain::TemplateVariant,
    error::{Context, StubResult},
};

use super::builtin::builtin_text;
use crate::filesystem::map_io_error;

const STUB_EXTENSION: &str = "stub";

/// Reads `<dir>/<key>.stub` when present, otherwise the built-in stub.
///
/// A missing directory is not an error: every variant then falls back to
/// the built-ins.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    dir: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn override_path(&self, variant: TemplateVariant) -> PathBuf {
        self.dir.join(variant.stub_file_name())
    }

    /// `.stub` files in the directory that match no template variant.
    ///
    /// Usually a typo in an override name; the file would be ignored.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn unrecognised(&self) -> StubResult<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut stray = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.context("scanning template directory")?;
            let path = entry.path();

            let is_stub = entry.file_type().is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(STUB_EXTENSION);
            if !is_stub {
                continue;
            }

            let key = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            if TemplateVariant::from_key(key).is_none() {
                warn!(path = %path.display(), "Unrecognised stub");
                stray.push(path.to_path_buf());
            }
        }

        Ok(stray)
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn text(&self, variant: TemplateVariant) -> StubResult<String> {
        let path = self.override_path(variant);
        if path.is_file() {
            debug!(template = %variant, path = %path.display(), "Using stub override");
            return fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read stub"));
        }
        Ok(builtin_text(variant).to_string())
    }

    fn origin(&self, variant: TemplateVariant) -> TemplateOrigin {
        let path = self.override_path(variant);
        if path.is_file() {
            TemplateOrigin::File(path)
        } else {
            TemplateOrigin::Builtin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("service.stub"), "pub struct {{ class }}Custom;\n").unwrap();
        let store = DirectoryTemplateStore::new(dir.path());

        assert_eq!(
            store.text(TemplateVariant::Service).unwrap(),
            "pub struct {{ class }}Custom;\n"
        );
        assert_eq!(
            store.origin(TemplateVariant::Service),
            TemplateOrigin::File(dir.path().join("service.stub"))
        );
        assert_eq!(
            store.text(TemplateVariant::Repository).unwrap(),
            builtin_text(TemplateVariant::Repository)
        );
        assert_eq!(
            store.origin(TemplateVariant::Repository),
            TemplateOrigin::Builtin
        );
    }

    #[test]
    fn missing_directory_falls_back_entirely() {
        let store = DirectoryTemplateStore::new("/definitely/not/here");
        for variant in TemplateVariant::ALL {
            assert_eq!(store.text(variant).unwrap(), builtin_text(variant));
        }
        assert!(store.unrecognised().unwrap().is_empty());
    }

    #[test]
    fn unrecognised_lists_stray_stubs_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("model.stub"), "x").unwrap();
        fs::write(dir.path().join("repositry.stub"), "x").unwrap();
        fs::write(dir.path().join("README.md"), "x").unwrap();

        let stray = DirectoryTemplateStore::new(dir.path()).unrecognised().unwrap();
        assert_eq!(stray, vec![dir.path().join("repositry.stub")]);
    }
}
