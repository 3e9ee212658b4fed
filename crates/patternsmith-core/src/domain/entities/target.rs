//! Resolved target: where a generated class lives and what it is called.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Separator between namespace segments in generated Rust paths.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Fully-resolved location of one generated class.
///
/// Derived deterministically from a raw name by
/// [`NameResolver`](crate::domain::NameResolver); it has no identity of its
/// own, two targets built from the same input are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    qualified_class_name: String,
    file_path: PathBuf,
    namespace: String,
    class_name: String,
    root_namespace: String,
    #[serde(skip)]
    interfaces_dir: String,
}

impl ResolvedTarget {
    pub(crate) fn new(
        namespace: String,
        class_name: String,
        file_path: PathBuf,
        root_namespace: String,
        interfaces_dir: String,
    ) -> Self {
        Self {
            qualified_class_name: join_namespace(&namespace, &class_name),
            file_path,
            namespace,
            class_name,
            root_namespace,
            interfaces_dir,
        }
    }

    pub fn qualified_class_name(&self) -> &str {
        &self.qualified_class_name
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// `<Class>Interface`.
    pub fn interface_name(&self) -> String {
        format!("{}Interface", self.class_name)
    }

    /// `<namespace>::Interfaces`.
    pub fn interface_namespace(&self) -> String {
        join_namespace(&self.namespace, &self.interfaces_dir)
    }

    /// Target of the companion interface file.
    ///
    /// Computed structurally: the main file's directory, then the interfaces
    /// directory, then `<Class>Interface.<ext>`. The class name recurring
    /// elsewhere in the path has no effect.
    pub fn interface_target(&self) -> ResolvedTarget {
        let interface_name = self.interface_name();

        let mut file_name = interface_name.clone();
        if let Some(ext) = self.file_path.extension().and_then(|e| e.to_str()) {
            file_name.push('.');
            file_name.push_str(ext);
        }

        let dir = self
            .file_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        ResolvedTarget::new(
            self.interface_namespace(),
            interface_name,
            dir.join(&self.interfaces_dir).join(file_name),
            self.root_namespace.clone(),
            self.interfaces_dir.clone(),
        )
    }
}

/// Join two namespace fragments, tolerating an empty left side.
pub fn join_namespace(left: &str, right: &str) -> String {
    if left.is_empty() {
        right.to_string()
    } else {
        format!("{left}{NAMESPACE_SEPARATOR}{right}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_target(path: &str) -> ResolvedTarget {
        ResolvedTarget::new(
            "crate::Repositories".into(),
            "User".into(),
            PathBuf::from(path),
            "crate".into(),
            "Interfaces".into(),
        )
    }

    #[test]
    fn qualified_name_joins_namespace_and_class() {
        let target = user_target("src/Repositories/User.rs");
        assert_eq!(target.qualified_class_name(), "crate::Repositories::User");
    }

    #[test]
    fn interface_target_is_sibling_directory() {
        let target = user_target("src/Repositories/User.rs").interface_target();
        assert_eq!(
            target.file_path(),
            Path::new("src/Repositories/Interfaces/UserInterface.rs")
        );
        assert_eq!(target.namespace(), "crate::Repositories::Interfaces");
        assert_eq!(target.class_name(), "UserInterface");
        assert_eq!(
            target.qualified_class_name(),
            "crate::Repositories::Interfaces::UserInterface"
        );
    }

    #[test]
    fn interface_target_ignores_class_name_elsewhere_in_path() {
        // "User" also appears as a parent directory name.
        let target = user_target("User/src/Repositories/User.rs").interface_target();
        assert_eq!(
            target.file_path(),
            Path::new("User/src/Repositories/Interfaces/UserInterface.rs")
        );
    }

    #[test]
    fn join_namespace_handles_empty_left() {
        assert_eq!(join_namespace("", "Models"), "Models");
        assert_eq!(join_namespace("crate", "Models"), "crate::Models");
    }
}
