//! Template store adapters.
//!
//! [`BuiltinTemplateStore`] serves the stubs compiled into the binary;
//! [`DirectoryTemplateStore`] lets a project override any of them with a
//! `<key>.stub` file.

mod builtin;
mod directory;

pub use builtin::{BuiltinTemplateStore, builtin_text};
pub use directory::DirectoryTemplateStore;
