use crate::domain::value_objects::{EntityKind, TemplateVariant};

/// Picks the template variant for a request.
///
/// | kind       | interface | model | variant                        |
/// |------------|-----------|-------|--------------------------------|
/// | Repository | no        | no    | `Repository`                   |
/// | Repository | no        | yes   | `RepositoryModel`              |
/// | Repository | yes       | no    | `RepositoryWithInterface`      |
/// | Repository | yes       | yes   | `RepositoryModelWithInterface` |
/// | Service    | no        | *     | `Service`                      |
/// | Service    | yes       | *     | `ServiceWithInterface`         |
pub struct TemplateSelector;

impl TemplateSelector {
    pub fn select(kind: EntityKind, with_interface: bool, has_model: bool) -> TemplateVariant {
        match (kind, with_interface, has_model) {
            (EntityKind::Repository, false, false) => TemplateVariant::Repository,
            (EntityKind::Repository, false, true) => TemplateVariant::RepositoryModel,
            (EntityKind::Repository, true, false) => TemplateVariant::RepositoryWithInterface,
            (EntityKind::Repository, true, true) => TemplateVariant::RepositoryModelWithInterface,
            (EntityKind::Service, false, _) => TemplateVariant::Service,
            (EntityKind::Service, true, _) => TemplateVariant::ServiceWithInterface,
        }
    }

    /// Variant for the companion interface file, shared by every kind.
    pub const fn interface() -> TemplateVariant {
        TemplateVariant::InterfaceDeclaration
    }
}
