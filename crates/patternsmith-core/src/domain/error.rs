// ============================================================================
// domain/error.rs - NAMING AND MODEL VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a user input problem detected before any file is
/// touched, so all of them are reportable and non-fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A path segment of the requested name is a Rust keyword.
    #[error("The name \"{name}\" is reserved by Rust.")]
    ReservedName { name: String, keyword: String },

    /// The requested name cannot become a Rust type or module path.
    #[error("Invalid name \"{name}\": {reason}")]
    InvalidName { name: String, reason: String },

    /// The bound model name contains characters outside `[A-Za-z0-9_/\\]`.
    #[error("Model name \"{name}\" contains invalid characters.")]
    InvalidModelName { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ReservedName { keyword, .. } => vec![
                format!("'{keyword}' is a Rust keyword and cannot name a type or module"),
                "Pick a different name, e.g. add a suffix: UserRepository".into(),
            ],
            Self::InvalidName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Use letters, digits and underscores; separate namespaces with '.' or '/'"
                    .into(),
                "Examples: User, Admin.User, Billing/Invoice".into(),
            ],
            Self::InvalidModelName { .. } => vec![
                "Model names may only contain letters, digits, '_', '/' and '\\'".into(),
                "Example: --model Admin/User".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
