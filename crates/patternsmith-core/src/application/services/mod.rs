//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! "generate a repository or service" and "inspect or publish stubs".

pub mod file_writer;
pub mod generator;
pub mod template_service;

pub use file_writer::FileWriter;
pub use generator::{GeneratorService, Outcome};
pub use template_service::{TemplateInfo, TemplateService};
