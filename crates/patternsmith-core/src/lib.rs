//! patternsmith core - repository/service scaffolding, hexagonal style.
//!
//! This crate provides the domain and application layers of the
//! `patternsmith` generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         patternsmith-cli (CLI)          │
//! │   parses flags, loads config, reports   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GeneratorService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Reporter,   │
//! │  ModelGenerator, TestGenerator)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   patternsmith-adapters (Infrastructure)│
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): NameResolver, TemplateSelector, placeholders
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use patternsmith_core::prelude::*;
//!
//! # fn run(
//! #     store: Box<dyn TemplateStore>,
//! #     filesystem: Box<dyn Filesystem>,
//! #     reporter: Box<dyn Reporter>,
//! # ) -> StubResult<()> {
//! let service = GeneratorService::new(NameResolver::default(), store, filesystem, reporter);
//!
//! let request = GenerationRequest::new(EntityKind::Repository, "Admin/User").with_interface(true);
//! match service.generate(&request)? {
//!     Outcome::Created(result) => println!("{}", result.summary()),
//!     Outcome::Rejected(_) => {} // already reported
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileWriter, GeneratorService, Outcome, TemplateInfo, TemplateService,
        ports::{
            Filesystem, ModelGenerator, Reporter, TemplateOrigin, TemplateStore, TestGenerator,
        },
    };
    pub use crate::domain::{
        EntityKind, GenerationRequest, GenerationResult, ModelBinding, NameResolver,
        ProjectLayout, ResolvedTarget, TemplateSelector, TemplateVariant, substitute,
    };
    pub use crate::error::{StubError, StubResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
