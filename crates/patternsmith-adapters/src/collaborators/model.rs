use std::path::PathBuf;

use tracing::{debug, info, instrument};

use patternsmith_core::{
    application::{
        ApplicationError, FileWriter,
        ports::{Filesystem, ModelGenerator, TemplateStore},
    },
    domain::{NameResolver, ResolvedTarget, TemplateVariant, substitute},
    error::StubResult,
};

const NAME: &str = "model generator";

/// Writes `<source_root>/<models_dir>/<Model>.<ext>` from the `model` stub,
/// or the rooted location a name like `crate/Domain/User` spells out.
pub struct TemplateModelGenerator {
    resolver: NameResolver,
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl TemplateModelGenerator {
    pub fn new(
        resolver: NameResolver,
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            resolver,
            store,
            filesystem,
        }
    }

    /// Model target for a raw binding such as `User`, `Billing/Invoice` or
    /// `crate/Domain/User`; the file always matches the binding's path.
    fn target(&self, name: &str) -> StubResult<ResolvedTarget> {
        self.resolver.resolve_model(name).map_err(|e| {
            ApplicationError::Collaborator {
                name: NAME,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl ModelGenerator for TemplateModelGenerator {
    #[instrument(skip(self))]
    fn generate(&self, name: &str) -> StubResult<Option<PathBuf>> {
        let target = self.target(name)?;
        let path = target.file_path().to_path_buf();

        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Model exists, leaving it untouched");
            return Ok(None);
        }

        let text = self.store.text(TemplateVariant::Model)?;
        FileWriter::new(self.filesystem.as_ref())
            .labelled("Model file")
            .write(&path, &substitute(&text, &target, None), false)?;

        info!(path = %path.display(), "Model created");
        Ok(Some(path))
    }
}
