//! Name resolution: raw user input to namespace, class name and file path.
//!
//! ```text
//!   " Admin.User "  ──normalize──▶  "Admin/User"
//!                   ──validate───▶  ["Admin", "User"]   (keywords, identifiers)
//!                   ──qualify────▶  crate::Repositories::Admin::User
//!                                   ./src/Repositories/Admin/User.rs
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        model::ModelBinding,
        target::{ResolvedTarget, join_namespace},
    },
    error::DomainError,
    value_objects::EntityKind,
};

/// Rust strict and reserved keywords, including `Self`.
///
/// Weak keywords (`union`, `macro_rules`, `raw`, `safe`) are valid
/// identifiers and stay allowed.
pub const RESERVED_WORDS: &[&str] = &[
    // strict
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
    // reserved for future use
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Where generated files go and how their namespaces are spelled.
///
/// Supplied by the command host; the defaults describe a conventional
/// `src/`-rooted crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    pub project_dir: PathBuf,
    pub source_root: PathBuf,
    pub root_namespace: String,
    pub extension: String,
    pub repositories_dir: String,
    pub services_dir: String,
    pub interfaces_dir: String,
    pub models_dir: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            source_root: PathBuf::from("src"),
            root_namespace: "crate".into(),
            extension: "rs".into(),
            repositories_dir: EntityKind::Repository.default_dir().into(),
            services_dir: EntityKind::Service.default_dir().into(),
            interfaces_dir: "Interfaces".into(),
            models_dir: "Models".into(),
        }
    }
}

impl ProjectLayout {
    /// Directory (and namespace segment) for an entity kind.
    pub fn kind_dir(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Repository => &self.repositories_dir,
            EntityKind::Service => &self.services_dir,
        }
    }
}

/// Derives [`ResolvedTarget`]s from raw names.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    layout: ProjectLayout,
}

impl NameResolver {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Resolve a repository or service name.
    ///
    /// # Errors
    ///
    /// - [`DomainError::ReservedName`] if any segment is a Rust keyword
    /// - [`DomainError::InvalidName`] if the name is empty or a segment is not
    ///   a Rust identifier
    pub fn resolve(&self, kind: EntityKind, raw_name: &str) -> Result<ResolvedTarget, DomainError> {
        self.resolve_in(self.layout.kind_dir(kind), raw_name)
    }

    /// Resolve a model name to the file its [`ModelBinding`] points at.
    ///
    /// Plain names go below the models directory. A name starting with the
    /// root namespace is taken as written: `crate/Domain/User` resolves to
    /// `<source_root>/Domain/User.rs`.
    pub fn resolve_model(&self, raw_name: &str) -> Result<ResolvedTarget, DomainError> {
        let name = normalize(raw_name);
        let segments: Vec<&str> = name.split(['/', '\\']).filter(|s| !s.is_empty()).collect();

        if let Some((root, rest)) = segments.split_first() {
            if *root == self.layout.root_namespace {
                match rest {
                    [class] => return self.resolve_in("", class),
                    [dir, tail @ ..] => {
                        validate_segments(dir)?;
                        return self.resolve_in(dir, &tail.join("/"));
                    }
                    [] => {}
                }
            }
        }

        self.resolve_in(&self.layout.models_dir, &name)
    }

    /// Validate and qualify a bound model name.
    pub fn bind_model(&self, raw_model: &str) -> Result<ModelBinding, DomainError> {
        ModelBinding::parse(
            raw_model,
            &self.layout.root_namespace,
            &self.layout.models_dir,
        )
    }

    /// Resolve `raw_name` into the given top-level directory; an empty `dir`
    /// places it directly below the source root.
    pub fn resolve_in(&self, dir: &str, raw_name: &str) -> Result<ResolvedTarget, DomainError> {
        let name = normalize(raw_name);
        let segments = validate_segments(&name)?;

        let (class_name, parents) = segments
            .split_last()
            .ok_or_else(|| invalid(&name, "name cannot be empty"))?;

        let mut namespace = self.layout.root_namespace.clone();
        let mut path = self.layout.project_dir.join(&self.layout.source_root);
        if !dir.is_empty() {
            namespace = join_namespace(&namespace, dir);
            path.push(dir);
        }
        for parent in parents {
            namespace = join_namespace(&namespace, parent);
            path.push(parent);
        }
        path.push(file_name(class_name, &self.layout.extension));

        Ok(ResolvedTarget::new(
            namespace,
            (*class_name).to_string(),
            path,
            self.layout.root_namespace.clone(),
            self.layout.interfaces_dir.clone(),
        ))
    }
}

/// Trim surrounding whitespace and turn `.` into `/`.
///
/// Leading separators are dropped so `/User` and `User` resolve alike.
pub fn normalize(raw_name: &str) -> String {
    raw_name
        .trim()
        .replace('.', "/")
        .trim_start_matches(['/', '\\'])
        .to_string()
}

/// `true` if `word` is a Rust keyword (case-sensitive).
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

fn validate_segments(name: &str) -> Result<Vec<&str>, DomainError> {
    if name.is_empty() {
        return Err(invalid(name, "name cannot be empty"));
    }

    let segments: Vec<&str> = name.split(['/', '\\']).collect();

    // Keywords first: they are the most specific diagnosis.
    if let Some(keyword) = segments.iter().find(|s| is_reserved(s)) {
        return Err(DomainError::ReservedName {
            name: name.to_string(),
            keyword: (*keyword).to_string(),
        });
    }

    for segment in &segments {
        if segment.is_empty() {
            return Err(invalid(name, "name contains an empty path segment"));
        }
        if !is_identifier(segment) {
            return Err(invalid(
                name,
                &format!("'{segment}' is not a valid Rust identifier"),
            ));
        }
    }

    Ok(segments)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            segment != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn file_name(class_name: &str, extension: &str) -> String {
    if extension.is_empty() {
        class_name.to_string()
    } else {
        format!("{class_name}.{extension}")
    }
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
