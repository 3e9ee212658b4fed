//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PATTERNSMITH_<SECTION>__<KEY>`
//! 3. `<project>/.patternsmith.toml`
//! 4. The user config file (`--config` replaces 3 and 4)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use patternsmith_core::domain::ProjectLayout;

/// Project-local configuration file name.
pub const LOCAL_CONFIG: &str = ".patternsmith.toml";

const ENV_PREFIX: &str = "PATTERNSMITH";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated code goes and how it is namespaced.
    pub project: ProjectConfig,
    /// Stub overrides.
    pub templates: TemplateConfig,
    /// Matching-test generation.
    pub tests: TestsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub root_namespace: String,
    pub source_root: PathBuf,
    pub extension: String,
    pub repositories_dir: String,
    pub services_dir: String,
    pub interfaces_dir: String,
    pub models_dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding `<key>.stub` overrides, relative to the project.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestsConfig {
    /// Generate a matching test even without `--test`.
    pub enabled: bool,
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is
    /// left at `auto`.
    pub format: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let layout = ProjectLayout::default();
        Self {
            root_namespace: layout.root_namespace,
            source_root: layout.source_root,
            extension: layout.extension,
            repositories_dir: layout.repositories_dir,
            services_dir: layout.services_dir,
            interfaces_dir: layout.interfaces_dir,
            models_dir: layout.models_dir,
        }
    }
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            root: PathBuf::from("tests"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl ProjectConfig {
    /// The layout the generator works with, rooted at `project_dir`.
    pub fn layout(&self, project_dir: &Path) -> ProjectLayout {
        ProjectLayout {
            project_dir: project_dir.to_path_buf(),
            source_root: self.source_root.clone(),
            root_namespace: self.root_namespace.clone(),
            extension: self.extension.clone(),
            repositories_dir: self.repositories_dir.clone(),
            services_dir: self.services_dir.clone(),
            interfaces_dir: self.interfaces_dir.clone(),
            models_dir: self.models_dir.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the user config file and `<project_dir>/.patternsmith.toml`
    /// are read when present.
    pub fn load(config_file: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        for (path, required) in Self::sources(config_file, project_dir) {
            debug!(path = %path.display(), required, "Config source");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Files consulted by [`Self::load`], lowest priority first.
    fn sources(config_file: Option<&Path>, project_dir: &Path) -> Vec<(PathBuf, bool)> {
        match config_file {
            Some(path) => vec![(path.to_path_buf(), true)],
            None => vec![
                (Self::config_path(), false),
                (project_dir.join(LOCAL_CONFIG), false),
            ],
        }
    }

    /// The file `config path` reports: the explicit file, else the project
    /// file if present, else the user config file.
    pub fn active_path(config_file: Option<&Path>, project_dir: &Path) -> PathBuf {
        if let Some(path) = config_file {
            return path.to_path_buf();
        }
        let local = project_dir.join(LOCAL_CONFIG);
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.patternsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "patternsmith", "patternsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// Value of a dotted key such as `project.root_namespace`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "project.root_namespace" => self.project.root_namespace.clone(),
            "project.source_root" => self.project.source_root.display().to_string(),
            "project.extension" => self.project.extension.clone(),
            "project.repositories_dir" => self.project.repositories_dir.clone(),
            "project.services_dir" => self.project.services_dir.clone(),
            "project.interfaces_dir" => self.project.interfaces_dir.clone(),
            "project.models_dir" => self.project.models_dir.clone(),
            "templates.path" => self
                .templates
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "tests.enabled" => self.tests.enabled.to_string(),
            "tests.root" => self.tests.root.display().to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_layout() {
        let cfg = AppConfig::default();
        let layout = cfg.project.layout(Path::new("."));
        assert_eq!(layout, ProjectLayout::default());
        assert!(!cfg.tests.enabled);
    }

    #[test]
    fn load_with_missing_optional_files_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.toml");
        std::fs::write(&file, "").unwrap();

        let cfg = AppConfig::load(Some(&file), dir.path()).unwrap();
        assert_eq!(cfg.project, ProjectConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.toml");
        std::fs::write(
            &file,
            "[project]\nroot_namespace = \"app\"\n\n[tests]\nenabled = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file), dir.path()).unwrap();
        assert_eq!(cfg.project.root_namespace, "app");
        assert_eq!(cfg.project.models_dir, "Models");
        assert!(cfg.tests.enabled);
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml")), dir.path()).is_err());
    }

    #[test]
    fn active_path_prefers_project_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::active_path(None, dir.path()), AppConfig::config_path());

        std::fs::write(dir.path().join(LOCAL_CONFIG), "").unwrap();
        assert_eq!(
            AppConfig::active_path(None, dir.path()),
            dir.path().join(LOCAL_CONFIG)
        );
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("project.root_namespace").as_deref(), Some("crate"));
        assert_eq!(cfg.get("tests.root").as_deref(), Some("tests"));
        assert_eq!(cfg.get("defaults.lang"), None);
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
