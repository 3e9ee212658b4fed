//! Generation result and the one-line summary reported to the user.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::EntityKind;

/// What one successful invocation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    kind: EntityKind,
    written_paths: Vec<PathBuf>,
    produced_interface: bool,
    produced_test: bool,
    model_path: Option<PathBuf>,
}

impl GenerationResult {
    pub(crate) fn new(kind: EntityKind, main_path: PathBuf) -> Self {
        Self {
            kind,
            written_paths: vec![main_path],
            produced_interface: false,
            produced_test: false,
            model_path: None,
        }
    }

    pub(crate) fn record_interface(&mut self, path: PathBuf) {
        self.written_paths.push(path);
        self.produced_interface = true;
    }

    pub(crate) fn record_test(&mut self, path: PathBuf) {
        self.written_paths.push(path);
        self.produced_test = true;
    }

    pub(crate) fn record_model(&mut self, path: PathBuf) {
        self.model_path = Some(path);
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Paths in write order: main file, interface, test.
    pub fn written_paths(&self) -> &[PathBuf] {
        &self.written_paths
    }

    pub fn produced_interface(&self) -> bool {
        self.produced_interface
    }

    pub fn produced_test(&self) -> bool {
        self.produced_test
    }

    /// Model file created by the companion model generator, if any.
    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    /// `Repository file and interface [a,b] created successfully.`
    pub fn summary(&self) -> String {
        let mut info = self.kind.label().to_string();
        if self.produced_interface {
            info.push_str(" and interface");
        }
        if self.produced_test {
            info.push_str(" and test");
        }

        let paths = self
            .written_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(",");

        format!("{info} [{paths}] created successfully.")
    }
}
