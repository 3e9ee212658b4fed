//! Generation request: what the command host asks the generator to do.

use serde::Serialize;

use crate::domain::value_objects::EntityKind;

/// A single, immutable generation request.
///
/// Built with consuming `with_*` methods and never mutated afterwards:
///
/// ```rust
/// use patternsmith_core::domain::{EntityKind, GenerationRequest};
///
/// let request = GenerationRequest::new(EntityKind::Repository, "User")
///     .with_model("User")
///     .with_interface(true);
///
/// assert_eq!(request.bound_model(), Some("User"));
/// assert!(!request.force());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    kind: EntityKind,
    raw_name: String,
    bound_model: Option<String>,
    with_interface: bool,
    force: bool,
}

impl GenerationRequest {
    pub fn new(kind: EntityKind, raw_name: impl Into<String>) -> Self {
        Self {
            kind,
            raw_name: raw_name.into(),
            bound_model: None,
            with_interface: false,
            force: false,
        }
    }

    /// Bind the generated class to a data model.
    ///
    /// An empty string is treated as "no model", matching how an empty
    /// `--model=` flag behaves on the command line.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.bound_model = (!model.is_empty()).then_some(model);
        self
    }

    pub fn with_interface(mut self, with_interface: bool) -> Self {
        self.with_interface = with_interface;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn bound_model(&self) -> Option<&str> {
        self.bound_model.as_deref()
    }

    pub fn with_interface_requested(&self) -> bool {
        self.with_interface
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain() {
        let req = GenerationRequest::new(EntityKind::Service, "Billing");
        assert_eq!(req.kind(), EntityKind::Service);
        assert_eq!(req.raw_name(), "Billing");
        assert_eq!(req.bound_model(), None);
        assert!(!req.with_interface_requested());
        assert!(!req.force());
    }

    #[test]
    fn empty_model_means_unbound() {
        let req = GenerationRequest::new(EntityKind::Repository, "User").with_model("");
        assert_eq!(req.bound_model(), None);
    }
}
