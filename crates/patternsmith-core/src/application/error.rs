//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming
//! rules. Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Target file present and `force` not set.
    #[error("{label} already exists.")]
    AlreadyExists { label: String, path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template store has no text for a variant.
    #[error("Template not found: {key}")]
    TemplateNotFound { key: String },

    /// The in-memory filesystem lock was poisoned by a panicking writer.
    #[error("In-memory filesystem lock poisoned")]
    LockPoisoned,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// A companion generator (model, test) failed.
    #[error("{name} failed: {reason}")]
    Collaborator { name: &'static str, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path, .. } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TemplateNotFound { key } => vec![
                format!("No stub for '{key}'"),
                "Try: patternsmith list-templates".into(),
                "Or re-publish the defaults: patternsmith publish-templates --force".into(),
            ],
            Self::LockPoisoned => vec![
                "A previous write panicked while holding the lock".into(),
                "Start from a fresh MemoryFilesystem".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            Self::Collaborator { name, .. } => vec![
                format!("The {name} did not complete"),
                "Check the error details above".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::LockPoisoned | Self::Collaborator { .. } => {
                ErrorCategory::Internal
            }
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
