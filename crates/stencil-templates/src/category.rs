//! Template categories.

use std::path::{Path, PathBuf};

/// Category holding ordinary "new file" templates.
pub const DEFAULT_TEMPLATES_CATEGORY: &str = "Default";
/// Category holding templates used by the host itself, hidden from users.
pub const INTERNAL_TEMPLATES_CATEGORY: &str = "Internal";
/// Category holding fragments included by other templates.
pub const INCLUDES_TEMPLATES_CATEGORY: &str = "Includes";
/// Category holding code snippets inserted into existing files.
pub const CODE_TEMPLATES_CATEGORY: &str = "Code";
/// Category holding enterprise framework descriptors.
pub const J2EE_TEMPLATES_CATEGORY: &str = "J2EE";

pub const INTERNAL_DIR: &str = "internal";
pub const INCLUDES_DIR: &str = "includes";
pub const CODE_TEMPLATES_DIR: &str = "code";
pub const J2EE_TEMPLATES_DIR: &str = "j2ee";

/// An immutable template namespace: a name plus the directory holding its
/// user overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    root: PathBuf,
    internal: bool,
}

impl Category {
    /// Create a user-visible category.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            internal: false,
        }
    }

    /// Create a category whose templates are not shown to users.
    pub fn internal(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            internal: true,
            ..Self::new(name, root)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory holding this category's user overrides.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    /// The standard categories under `config_dir`, in declared order.
    ///
    /// Declared order decides which category claims a resource path when
    /// several namespace prefixes match.
    pub fn standard(config_dir: &Path) -> Vec<Category> {
        vec![
            Category::new(DEFAULT_TEMPLATES_CATEGORY, config_dir),
            Category::internal(INTERNAL_TEMPLATES_CATEGORY, config_dir.join(INTERNAL_DIR)),
            Category::new(INCLUDES_TEMPLATES_CATEGORY, config_dir.join(INCLUDES_DIR)),
            Category::new(CODE_TEMPLATES_CATEGORY, config_dir.join(CODE_TEMPLATES_DIR)),
            Category::new(J2EE_TEMPLATES_CATEGORY, config_dir.join(J2EE_TEMPLATES_DIR)),
        ]
    }
}
