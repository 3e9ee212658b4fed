//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `patternsmith-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: exists / read / write / mkdir
//!   - `TemplateStore`: template text by variant
//!   - `ModelGenerator`: companion model creation
//!   - `TestGenerator`: companion test creation (optional capability)
//!   - `Reporter`: the command host's status channel

pub mod output;

pub use output::{
    Filesystem, ModelGenerator, Reporter, TemplateOrigin, TemplateStore, TestGenerator,
};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockModelGenerator, MockReporter, MockTemplateStore, MockTestGenerator,
};
