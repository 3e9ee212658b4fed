//! Application layer for patternsmith.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`GeneratorService`, `TemplateService`)
//! - **Ports**: traits for everything outside the process (filesystem,
//!   template text, companion generators, reporting)
//! - **Errors**: orchestration and I/O failures
//!
//! Naming rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FileWriter, GeneratorService, Outcome, TemplateInfo, TemplateService};

pub use ports::{
    Filesystem, ModelGenerator, Reporter, TemplateOrigin, TemplateStore, TestGenerator,
};

pub use error::ApplicationError;
