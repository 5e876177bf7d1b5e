//! Classification of paths found beneath a template resource root.

use std::collections::HashSet;
use std::path::Path;

use stencil_common_fs::path::{relative_to, same_location, to_unix_string};

use crate::filetype::FileTypeRegistry;
use crate::{Result, TemplateError};

/// Suffix of template files.
pub const TEMPLATE_EXTENSION_SUFFIX: &str = ".ft";
/// Suffix of description documents.
pub const DESCRIPTION_EXTENSION_SUFFIX: &str = ".html";
/// Root-level description shown for templates without one of their own.
pub const DEFAULT_DESCRIPTION_PATH: &str = "default.html";
/// Description shown for include templates without one of their own.
pub const INCLUDE_DESCRIPTION_PATH: &str = "includes/default.html";

/// What a relative path under a resource root is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    DefaultDescription,
    IncludeDescription,
    Description,
    Template,
    Ignored,
}

/// Classify one relative path.
pub fn classify(path: &str) -> PathKind {
    if path == DEFAULT_DESCRIPTION_PATH {
        PathKind::DefaultDescription
    } else if path == INCLUDE_DESCRIPTION_PATH {
        PathKind::IncludeDescription
    } else if path.ends_with(DESCRIPTION_EXTENSION_SUFFIX) {
        PathKind::Description
    } else if path.ends_with(TEMPLATE_EXTENSION_SUFFIX) {
        PathKind::Template
    } else {
        PathKind::Ignored
    }
}

/// The paths of one resource root, partitioned.
#[derive(Debug, Default)]
pub struct RootContents<'a> {
    pub default_description: Option<&'a str>,
    pub include_description: Option<&'a str>,
    /// Description candidates, scoped to this root only.
    pub descriptions: HashSet<&'a str>,
    /// Template paths, in listing order.
    pub templates: Vec<&'a str>,
}

/// Partition every path of one root by [`classify`].
pub fn partition(paths: &[String]) -> RootContents<'_> {
    let mut contents = RootContents::default();
    for path in paths.iter().map(String::as_str) {
        match classify(path) {
            PathKind::DefaultDescription => contents.default_description = Some(path),
            PathKind::IncludeDescription => contents.include_description = Some(path),
            PathKind::Description => {
                contents.descriptions.insert(path);
            }
            PathKind::Template => contents.templates.push(path),
            PathKind::Ignored => {}
        }
    }
    contents
}

/// Namespace prefix of a category directory relative to the config root.
///
/// Empty when both are the same directory, otherwise the `/`-separated
/// relative path followed by `/`.
pub fn namespace_prefix(config_dir: &Path, category_root: &Path) -> String {
    if same_location(config_dir, category_root) {
        return String::new();
    }
    format!("{}/", to_unix_string(relative_to(category_root, config_dir)))
}

/// Whether `path` is a direct child of the namespace `prefix`.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| !rest.contains('/'))
}

/// Index of the first prefix (in declared order) claiming `path`.
pub fn claiming_index<S: AsRef<str>>(path: &str, prefixes: &[S]) -> Option<usize> {
    prefixes
        .iter()
        .position(|prefix| matches_prefix(path, prefix.as_ref()))
}

/// Split a claimed template path into its name and registered extension.
///
/// `includes/File Header.java.ft` under prefix `includes/` gives
/// (`File Header`, `java`).
pub fn split_template_path(
    path: &str,
    prefix: &str,
    file_types: &dyn FileTypeRegistry,
) -> Result<(String, String)> {
    let file_name = path
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(TEMPLATE_EXTENSION_SUFFIX))
        .ok_or_else(|| TemplateError::InvalidTemplatePath(path.to_string()))?;

    split_file_name(file_name, file_types)
}

/// Split `NewClass.java` into (`NewClass`, `java`).
pub fn split_file_name(
    file_name: &str,
    file_types: &dyn FileTypeRegistry,
) -> Result<(String, String)> {
    let extension = file_types.extension_for(file_name);
    let name = file_name
        .strip_suffix(extension.as_str())
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|name| !extension.is_empty() && !name.is_empty())
        .ok_or_else(|| TemplateError::UnknownExtension(file_name.to_string()))?;

    Ok((name.to_string(), extension))
}
