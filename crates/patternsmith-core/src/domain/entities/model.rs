//! Bound model: the data-model type a generated class is specialised for.

use serde::Serialize;

use crate::domain::{
    entities::target::{NAMESPACE_SEPARATOR, join_namespace},
    error::DomainError,
    naming::is_reserved,
};

/// A validated model binding with every name the templates need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelBinding {
    raw: String,
    qualified: String,
    basename: String,
    variable: String,
}

impl ModelBinding {
    /// Validate `raw` and qualify it below `<root_namespace>::<models_dir>`.
    ///
    /// A name already starting with the root namespace is kept as-is.
    /// Both `/` and `\` separate segments.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidModelName`] if `raw` is empty or contains any
    ///   character outside `[A-Za-z0-9_/\\]`
    /// - [`DomainError::ReservedName`] if the basename is a Rust keyword
    pub fn parse(raw: &str, root_namespace: &str, models_dir: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidModelName {
            name: raw.to_string(),
        };

        if raw.chars().any(|c| !is_model_char(c)) {
            return Err(invalid());
        }

        let segments: Vec<&str> = raw
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .collect();

        let basename = segments.last().copied().ok_or_else(invalid)?.to_string();
        if is_reserved(&basename) {
            return Err(DomainError::ReservedName {
                name: raw.to_string(),
                keyword: basename,
            });
        }

        let joined = segments.join(NAMESPACE_SEPARATOR);
        let qualified = if segments.first() == Some(&root_namespace) {
            joined
        } else {
            join_namespace(&join_namespace(root_namespace, models_dir), &joined)
        };

        Ok(Self {
            raw: raw.to_string(),
            variable: variable_name(&basename),
            qualified,
            basename,
        })
    }

    /// The name exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Fully-qualified model path, e.g. `crate::Models::User`.
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// Last segment, e.g. `User`.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Lower-camel variable name, e.g. `user`.
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

fn is_model_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '\\')
}

/// Parameter name for a model: `User` -> `user`, `Type` -> `type_`.
fn variable_name(basename: &str) -> String {
    let variable = lower_first(basename);
    if is_reserved(&variable) {
        format!("{variable}_")
    } else {
        variable
    }
}

/// Lower-case the first character only (`BlogPost` -> `blogPost`).
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_model_is_qualified_under_models() {
        let model = ModelBinding::parse("User", "crate", "Models").unwrap();
        assert_eq!(model.qualified(), "crate::Models::User");
        assert_eq!(model.basename(), "User");
        assert_eq!(model.variable(), "user");
    }

    #[test]
    fn nested_model_uses_last_segment() {
        let model = ModelBinding::parse("Admin/BlogPost", "crate", "Models").unwrap();
        assert_eq!(model.qualified(), "crate::Models::Admin::BlogPost");
        assert_eq!(model.basename(), "BlogPost");
        assert_eq!(model.variable(), "blogPost");
    }

    #[test]
    fn backslash_separators_are_accepted() {
        let model = ModelBinding::parse("\\Admin\\User", "crate", "Models").unwrap();
        assert_eq!(model.qualified(), "crate::Models::Admin::User");
    }

    #[test]
    fn already_rooted_model_is_kept() {
        let model = ModelBinding::parse("app/Domain/User", "app", "Models").unwrap();
        assert_eq!(model.qualified(), "app::Domain::User");
    }

    #[test]
    fn space_is_rejected() {
        assert_eq!(
            ModelBinding::parse("My Model", "crate", "Models"),
            Err(DomainError::InvalidModelName {
                name: "My Model".into()
            })
        );
    }

    #[test]
    fn punctuation_and_separator_only_names_are_rejected() {
        assert!(ModelBinding::parse("User-Model", "crate", "Models").is_err());
        assert!(ModelBinding::parse("User.Model", "crate", "Models").is_err());
        assert!(ModelBinding::parse("//", "crate", "Models").is_err());
        assert!(ModelBinding::parse("", "crate", "Models").is_err());
    }

    #[test]
    fn keyword_variable_gets_a_suffix() {
        let model = ModelBinding::parse("Type", "crate", "Models").unwrap();
        assert_eq!(model.basename(), "Type");
        assert_eq!(model.variable(), "type_");

        let model = ModelBinding::parse("Shop/Match", "crate", "Models").unwrap();
        assert_eq!(model.variable(), "match_");
    }

    #[test]
    fn keyword_basename_is_reserved() {
        assert!(matches!(
            ModelBinding::parse("Admin/type", "crate", "Models"),
            Err(DomainError::ReservedName { ref keyword, .. }) if keyword == "type"
        ));
    }

    #[test]
    fn lower_first_only_touches_first_char() {
        assert_eq!(lower_first("HTTPClient"), "hTTPClient");
        assert_eq!(lower_first(""), "");
    }
}
