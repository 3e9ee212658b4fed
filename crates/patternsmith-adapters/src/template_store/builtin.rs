//! Stubs shipped with patternsmith.

use patternsmith_core::{
    application::ports::{TemplateOrigin, TemplateStore},
    domain::TemplateVariant,
    error::StubResult,
};

/// Text of the stub compiled into the binary for `variant`.
pub fn builtin_text(variant: TemplateVariant) -> &'static str {
    match variant {
        TemplateVariant::Repository => include_str!("../../templates/repository.stub"),
        TemplateVariant::RepositoryModel => include_str!("../../templates/repository-model.stub"),
        TemplateVariant::RepositoryWithInterface => {
            include_str!("../../templates/repository.interface.stub")
        }
        TemplateVariant::RepositoryModelWithInterface => {
            include_str!("../../templates/repository-model.interface.stub")
        }
        TemplateVariant::Service => include_str!("../../templates/service.stub"),
        TemplateVariant::ServiceWithInterface => {
            include_str!("../../templates/service.interface.stub")
        }
        TemplateVariant::InterfaceDeclaration => include_str!("../../templates/interface.stub"),
        TemplateVariant::Model => include_str!("../../templates/model.stub"),
        TemplateVariant::MatchingTest => include_str!("../../templates/test.stub"),
    }
}

/// Template store backed by the built-in stubs only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn text(&self, variant: TemplateVariant) -> StubResult<String> {
        Ok(builtin_text(variant).to_string())
    }

    fn origin(&self, _variant: TemplateVariant) -> TemplateOrigin {
        TemplateOrigin::Builtin
    }
}
