//! File type registry used to split template file names.

/// Maps a file name to its registered extension.
pub trait FileTypeRegistry: Send + Sync {
    /// Extension of `file_name` without the leading dot, or an empty string
    /// when none is registered.
    fn extension_for(&self, file_name: &str) -> String;
}

/// Registry recognizing plain extensions plus configured multi-dot ones.
///
/// `Page.html.twig` has extension `html.twig` once that compound extension is
/// registered, and `twig` otherwise.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    compound: Vec<String>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a multi-dot extension such as `blade.php`.
    pub fn with_compound(mut self, extension: impl Into<String>) -> Self {
        self.register_compound(extension);
        self
    }

    pub fn register_compound(&mut self, extension: impl Into<String>) {
        let extension = extension.into();
        if !self.compound.contains(&extension) {
            self.compound.push(extension);
            // Longest first so the most specific extension wins
            self.compound.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        }
    }

    /// Build from the `templates.compound_extensions` configuration key.
    pub fn from_config(config: &stencil_common_config::TemplatesConfig) -> Self {
        let mut registry = Self::new();
        for ext in &config.compound_extensions {
            registry.register_compound(ext.clone());
        }
        registry
    }
}

impl FileTypeRegistry for ExtensionRegistry {
    fn extension_for(&self, file_name: &str) -> String {
        for ext in &self.compound {
            // Must be preceded by a dot and leave a non-empty name
            if let Some(stem) = file_name.strip_suffix(ext.as_str()) {
                if stem.len() > 1 && stem.ends_with('.') {
                    return ext.clone();
                }
            }
        }

        match file_name.rfind('.') {
            Some(idx) if idx > 0 => file_name[idx + 1..].to_string(),
            _ => String::new(),
        }
    }
}
