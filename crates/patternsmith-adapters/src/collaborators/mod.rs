//! Companion generators driven by the main generator.
//!
//! Both render a stub from the template store and write it through the
//! filesystem port, leaving existing files untouched.

mod model;

pub use model::TemplateModelGenerator;
pub use test::TemplateTestGenerator;
