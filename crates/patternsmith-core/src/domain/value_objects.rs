//! Domain value objects: EntityKind and TemplateVariant.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Selection logic lives in `selection.rs`; this file only defines the
//! types and their string representations.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── EntityKind ───────────────────────────────────────────────────────────────

/// Which generator flow is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Repository,
    Service,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [Self::Repository, Self::Service];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Service => "service",
        }
    }

    /// Human label used in status messages ("Repository file already exists.").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Repository => "Repository file",
            Self::Service => "Service file",
        }
    }

    /// Default directory (and namespace segment) below the source root.
    pub const fn default_dir(&self) -> &'static str {
        match self {
            Self::Repository => "Repositories",
            Self::Service => "Services",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateVariant ──────────────────────────────────────────────────────────

/// One fixed textual skeleton.
///
/// The first seven variants are the ones the selector can return; `Model`
/// and `MatchingTest` belong to the companion generators but live in the
/// same store so they can be listed, published and overridden together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateVariant {
    Repository,
    RepositoryModel,
    RepositoryWithInterface,
    RepositoryModelWithInterface,
    Service,
    ServiceWithInterface,
    InterfaceDeclaration,
    Model,
    MatchingTest,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 9] = [
        Self::Repository,
        Self::RepositoryModel,
        Self::RepositoryWithInterface,
        Self::RepositoryModelWithInterface,
        Self::Service,
        Self::ServiceWithInterface,
        Self::InterfaceDeclaration,
        Self::Model,
        Self::MatchingTest,
    ];

    /// Stable key, also the stub file name without extension.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::RepositoryModel => "repository-model",
            Self::RepositoryWithInterface => "repository.interface",
            Self::RepositoryModelWithInterface => "repository-model.interface",
            Self::Service => "service",
            Self::ServiceWithInterface => "service.interface",
            Self::InterfaceDeclaration => "interface",
            Self::Model => "model",
            Self::MatchingTest => "test",
        }
    }

    /// File name used when the stub is published or overridden.
    pub fn stub_file_name(&self) -> String {
        format!("{}.stub", self.key())
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Repository => "Plain repository",
            Self::RepositoryModel => "Repository bound to a model",
            Self::RepositoryWithInterface => "Repository implementing its interface",
            Self::RepositoryModelWithInterface => {
                "Model-bound repository implementing its interface"
            }
            Self::Service => "Plain service",
            Self::ServiceWithInterface => "Service implementing its interface",
            Self::InterfaceDeclaration => "Bare interface (trait) declaration",
            Self::Model => "Companion model",
            Self::MatchingTest => "Companion test",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
