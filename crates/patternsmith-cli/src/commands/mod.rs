//! Command handlers, one module per subcommand.

use std::path::{Path, PathBuf};

use patternsmith_adapters::{BuiltinTemplateStore, DirectoryTemplateStore};
use patternsmith_core::application::ports::TemplateStore;

use crate::config::AppConfig;

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
pub mod publish;

/// Configured override directory, resolved against the project directory.
pub(crate) fn template_dir(config: &AppConfig, project_dir: &Path) -> Option<PathBuf> {
    config
        .templates
        .path
        .as_ref()
        .map(|path| project_dir.join(path))
}

/// The store every command reads stubs from: overrides when
/// `templates.path` is set, the built-ins otherwise.
pub(crate) fn template_store(config: &AppConfig, project_dir: &Path) -> Box<dyn TemplateStore> {
    match template_dir(config, project_dir) {
        Some(dir) => Box::new(DirectoryTemplateStore::new(dir)),
        None => Box::new(BuiltinTemplateStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use patternsmith_core::application::ports::TemplateOrigin;
    use patternsmith_core::domain::TemplateVariant;

    use super::*;

    #[test]
    fn builtin_store_without_templates_path() {
        let store = template_store(&AppConfig::default(), Path::new("/app"));
        assert_eq!(store.origin(TemplateVariant::Service), TemplateOrigin::Builtin);
    }

    #[test]
    fn override_dir_is_relative_to_project() {
        let mut config = AppConfig::default();
        config.templates.path = Some(PathBuf::from("stubs"));
        assert_eq!(
            template_dir(&config, Path::new("/app")),
            Some(PathBuf::from("/app/stubs"))
        );
    }
}
