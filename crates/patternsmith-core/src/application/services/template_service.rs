//! Template Service - stub inspection and publishing.
//!
//! Separated from [`GeneratorService`](super::GeneratorService): listing and
//! publishing stubs never resolve names or touch generated sources.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateStore},
        services::file_writer::FileWriter,
    },
    domain::TemplateVariant,
    error::StubResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub key: String,
    pub file: String,
    pub description: String,
    pub origin: String,
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Every template variant, in declaration order.
    pub fn list(&self) -> Vec<TemplateInfo> {
        TemplateVariant::ALL
            .iter()
            .map(|variant| TemplateInfo {
                key: variant.key().to_string(),
                file: variant.stub_file_name(),
                description: variant.description().to_string(),
                origin: self.store.origin(*variant).to_string(),
            })
            .collect()
    }

    /// Write every stub into `dir` for customization.
    ///
    /// Stubs already present in `dir` are skipped unless `force` is set.
    /// Returns the paths actually written.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn publish(&self, dir: &Path, force: bool) -> StubResult<Vec<PathBuf>> {
        let writer = FileWriter::new(self.filesystem.as_ref()).labelled("Stub");
        let mut written = Vec::new();

        for variant in TemplateVariant::ALL {
            let path = dir.join(variant.stub_file_name());
            if writer.ensure_writable(&path, force).is_err() {
                info!(path = %path.display(), "Stub exists, skipping");
                continue;
            }

            let text = self.store.text(variant)?;
            if writer.write(&path, &text, force)? {
                written.push(path);
            }
        }

        info!(count = written.len(), "Stubs published");
        Ok(written)
    }
}
