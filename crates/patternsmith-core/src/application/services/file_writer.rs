//! Non-clobbering file writes.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::StubResult,
};

/// Writes generated text through the [`Filesystem`] port.
///
/// Existing files are only replaced when `force` is set. A forced write
/// whose content is byte-identical to the file on disk is skipped.
pub struct FileWriter<'a> {
    filesystem: &'a dyn Filesystem,
    label: &'a str,
}

impl<'a> FileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self {
            filesystem,
            label: "File",
        }
    }

    /// Name used in the `AlreadyExists` message, e.g. `"Repository file"`.
    pub fn labelled(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Fail with `AlreadyExists` if `path` exists and `force` is not set.
    pub fn ensure_writable(&self, path: &Path, force: bool) -> StubResult<()> {
        if !force && self.filesystem.exists(path) {
            return Err(ApplicationError::AlreadyExists {
                label: self.label.to_string(),
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Create parent directories and write `content` to `path`.
    ///
    /// Returns `false` when the write was skipped because the file already
    /// held exactly `content`.
    pub fn write(&self, path: &Path, content: &str, force: bool) -> StubResult<bool> {
        self.ensure_writable(path, force)?;

        if force && self.filesystem.exists(path) {
            if let Ok(existing) = self.filesystem.read_to_string(path) {
                if existing == content {
                    debug!(path = %path.display(), "Content unchanged, skipping write");
                    return Ok(false);
                }
            }
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;

        debug!(path = %path.display(), bytes = content.len(), "File written");
        Ok(true)
    }
}
