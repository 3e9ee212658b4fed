//! Core domain layer for patternsmith.
//!
//! Pure logic with no I/O: name resolution, template selection and
//! placeholder substitution. Filesystem access, template storage and the
//! companion generators are reached through ports defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem or process access
//! - **Immutable values**: requests and targets are built once, then read
//! - **Deterministic**: the same input always resolves to the same target

pub mod entities;
pub mod error;
pub mod naming;
pub mod placeholders;
pub mod selection;
pub mod value_objects;

pub use entities::{
    GenerationRequest, GenerationResult, ModelBinding, ResolvedTarget,
    target::{NAMESPACE_SEPARATOR, join_namespace},
};

pub use error::{DomainError, ErrorCategory};

pub use naming::{NameResolver, ProjectLayout, RESERVED_WORDS, is_reserved, normalize};
pub use placeholders::{PlaceholderSet, sort_imports, substitute, unresolved_placeholders};
pub use selection::TemplateSelector;
pub use value_objects::{EntityKind, TemplateVariant};
