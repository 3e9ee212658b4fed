//! Placeholder substitution.
//!
//! Templates are plain text with `{{ token }}` markers (the compact
//! `{{token}}` spelling is accepted too). Substitution is literal: every
//! occurrence of every known token is replaced, nothing else is
//! interpreted. There are no conditionals or loops.
//!
//! | Token                | Example value                      |
//! |----------------------|------------------------------------|
//! | `namespace`          | `crate::Repositories::Admin`       |
//! | `rootNamespace`      | `crate`                            |
//! | `class`              | `User`                             |
//! | `namespacedClass`    | `crate::Repositories::Admin::User` |
//! | `interface`          | `UserInterface`                    |
//! | `interfaceNamespace` | `crate::Repositories::Admin::Interfaces` |
//! | `namespacedModel`    | `crate::Models::User`              |
//! | `model`              | `User`                             |
//! | `modelVariable`      | `user`                             |
//!
//! The `test` stub also receives `testedType`, the generated type's path as
//! seen from an integration test (`app::Repositories::Admin::User::User`).

use crate::domain::entities::{model::ModelBinding, target::ResolvedTarget};

pub const NAMESPACE: &str = "namespace";
pub const ROOT_NAMESPACE: &str = "rootNamespace";
pub const CLASS: &str = "class";
pub const NAMESPACED_CLASS: &str = "namespacedClass";
pub const INTERFACE: &str = "interface";
pub const INTERFACE_NAMESPACE: &str = "interfaceNamespace";
pub const NAMESPACED_MODEL: &str = "namespacedModel";
pub const MODEL: &str = "model";
pub const MODEL_VARIABLE: &str = "modelVariable";
pub const TESTED_TYPE: &str = "testedType";

/// Ordered token -> value mapping built for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceholderSet {
    entries: Vec<(&'static str, String)>,
}

impl PlaceholderSet {
    /// Tokens for a target, plus the model tokens when a model is bound.
    pub fn for_target(target: &ResolvedTarget, model: Option<&ModelBinding>) -> Self {
        let mut set = Self::default()
            .with(NAMESPACE, target.namespace())
            .with(ROOT_NAMESPACE, target.root_namespace())
            .with(CLASS, target.class_name())
            .with(NAMESPACED_CLASS, target.qualified_class_name())
            .with(INTERFACE, target.interface_name())
            .with(INTERFACE_NAMESPACE, target.interface_namespace());

        if let Some(model) = model {
            set = set
                .with(NAMESPACED_MODEL, model.qualified())
                .with(MODEL, model.basename())
                .with(MODEL_VARIABLE, model.variable());
        }

        set
    }

    /// Add or replace a token.
    pub fn with(mut self, token: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    /// Replace every occurrence of every token in `template`.
    pub fn apply(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (token, value) in &self.entries {
            result = result.replace(&format!("{{{{ {token} }}}}"), value);
            result = result.replace(&format!("{{{{{token}}}}}"), value);
        }
        result
    }
}

/// Substitute the standard tokens for `target` (and `model`) into `template`.
pub fn substitute(template: &str, target: &ResolvedTarget, model: Option<&ModelBinding>) -> String {
    PlaceholderSet::for_target(target, model).apply(template)
}

/// Names of all `{{ ... }}` markers still present in `text`, in order of
/// first appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            break;
        };

        let inner = after[..close].trim();
        let is_token = !inner.is_empty()
            && inner.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if is_token && !found.iter().any(|f| f == inner) {
            found.push(inner.to_string());
        }

        rest = &after[close + 2..];
    }

    found
}

/// Sort the first contiguous block of single-line `use ...;` statements.
///
/// Grouped imports (`use a::{b, c};`) end the block and are never reordered.
pub fn sort_imports(text: &str) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    let Some(start) = lines.iter().position(|l| is_simple_import(l)) else {
        return text.to_string();
    };
    let end = lines[start..]
        .iter()
        .position(|l| !is_simple_import(l))
        .map_or(lines.len(), |n| start + n);

    let mut block: Vec<&str> = lines[start..end].iter().map(|l| l.trim_end()).collect();
    block.sort_unstable();

    let mut out = String::with_capacity(text.len());
    lines[..start].iter().for_each(|l| out.push_str(l));
    for import in block {
        out.push_str(import);
        out.push('\n');
    }
    lines[end..].iter().for_each(|l| out.push_str(l));

    // The block was the tail of a text without a final newline.
    if end == lines.len() && !text.ends_with('\n') {
        out.pop();
    }

    out
}

fn is_simple_import(line: &str) -> bool {
    let line = line.trim_end();
    line.starts_with("use ") && line.ends_with(';') && !line.contains('{')
}
