//! Infrastructure adapters for patternsmith.
//!
//! This crate implements the ports defined in
//! `patternsmith_core::application::ports`. It contains all filesystem
//! access and the stubs that ship with the binary.

pub mod collaborators;
pub mod filesystem;
pub mod reporter;
pub mod template_store;

// Re-export commonly used adapters
pub use collaborators::{TemplateModelGenerator, TemplateTestGenerator};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::{BufferedReporter, ReportLevel};
pub use template_store::{BuiltinTemplateStore, DirectoryTemplateStore, builtin_text};
