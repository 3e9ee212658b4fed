//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `patternsmith-adapters` crate provides implementations; the CLI
//! implements [`Reporter`].

use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::domain::{EntityKind, ResolvedTarget, TemplateVariant};
use crate::error::StubResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `patternsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `patternsmith_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> StubResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StubResult<()>;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> StubResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Where a template's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// Compiled into the binary.
    Builtin,
    /// Overridden by a stub file on disk.
    File(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Port for template text retrieval.
///
/// Implemented by:
/// - `patternsmith_adapters::template_store::BuiltinTemplateStore`
/// - `patternsmith_adapters::template_store::DirectoryTemplateStore`
#[cfg_attr(test, automock)]
pub trait TemplateStore: Send + Sync {
    /// Template text for a variant.
    fn text(&self, variant: TemplateVariant) -> StubResult<String>;

    /// Where [`TemplateStore::text`] would read this variant from.
    fn origin(&self, variant: TemplateVariant) -> TemplateOrigin;
}

/// Companion model generation, triggered when a model is bound.
///
/// Errors are owned by the implementation and propagate unmodified.
#[cfg_attr(test, automock)]
pub trait ModelGenerator: Send + Sync {
    /// Create the model named `name`.
    ///
    /// Returns the written path, or `None` when the model already existed
    /// and was left untouched.
    fn generate(&self, name: &str) -> StubResult<Option<PathBuf>>;
}

/// Companion test generation.
///
/// The capability is present iff the orchestrator was given an
/// implementation.
#[cfg_attr(test, automock)]
pub trait TestGenerator: Send + Sync {
    /// Create a test for the freshly generated class.
    ///
    /// Returns the written path, or `None` if no test was produced.
    fn generate(&self, target: &ResolvedTarget, kind: EntityKind) -> StubResult<Option<PathBuf>>;
}

/// The command host's reporting channel.
#[cfg_attr(test, automock)]
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
