//! Per-category template managers.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::category::Category;
use crate::classify::{split_file_name, TEMPLATE_EXTENSION_SUFFIX};
use crate::filetype::FileTypeRegistry;
use crate::record::TemplateRecord;
use crate::resource::path_url;
use crate::{Result, TemplateError};

/// Owns the templates of one category: bundled defaults plus the user's
/// customized overrides.
#[derive(Debug, Clone)]
pub struct CategoryManager {
    category: Category,
    defaults: Vec<TemplateRecord>,
    customized: Vec<TemplateRecord>,
}

impl CategoryManager {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            defaults: Vec::new(),
            customized: Vec::new(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn name(&self) -> &str {
        self.category.name()
    }

    /// Directory holding this category's user overrides.
    pub fn config_root(&self) -> &Path {
        self.category.root()
    }

    /// Append a bundled template. Duplicate names are kept as given.
    pub fn add_default_template(&mut self, record: TemplateRecord) {
        debug!(
            category = self.category.name(),
            template = %record.qualified_name(),
            "added default template"
        );
        self.defaults.push(record);
    }

    /// Bundled templates, in discovery order.
    pub fn default_templates(&self) -> &[TemplateRecord] {
        &self.defaults
    }

    /// User overrides loaded by the last [`load_customized_content`] call.
    ///
    /// [`load_customized_content`]: Self::load_customized_content
    pub fn customized_templates(&self) -> &[TemplateRecord] {
        &self.customized
    }

    /// Load user overrides from the category directory.
    ///
    /// Every `{name}.{extension}.ft` file directly inside [`config_root`]
    /// becomes a customized record; prior customizations are discarded. An
    /// override keeps the description of the bundled template it replaces.
    /// Files that cannot be understood are logged and skipped.
    ///
    /// [`config_root`]: Self::config_root
    pub fn load_customized_content(&mut self, file_types: &dyn FileTypeRegistry) -> Result<usize> {
        self.customized.clear();

        let entries = match fs::read_dir(self.category.root()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut file_names = Vec::new();
        for entry in entries {
            let entry = entry?;
            // Follows symlinks; dangling links are not files.
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(TEMPLATE_EXTENSION_SUFFIX) {
                    file_names.push(name.to_string());
                }
            }
        }
        file_names.sort();

        for file_name in file_names {
            match self.customized_record(&file_name, file_types) {
                Ok(record) => self.customized.push(record),
                Err(e) => warn!(
                    category = self.category.name(),
                    file = %file_name,
                    error = %e,
                    "skipping customized template"
                ),
            }
        }

        debug!(
            category = self.category.name(),
            count = self.customized.len(),
            "loaded customized templates"
        );
        Ok(self.customized.len())
    }

    fn customized_record(
        &self,
        file_name: &str,
        file_types: &dyn FileTypeRegistry,
    ) -> Result<TemplateRecord> {
        let stem = file_name
            .strip_suffix(TEMPLATE_EXTENSION_SUFFIX)
            .ok_or_else(|| TemplateError::InvalidTemplatePath(file_name.to_string()))?;
        let (name, extension) = split_file_name(stem, file_types)?;
        let content_url = path_url(&self.category.root().join(file_name))?;

        let description_url = self
            .defaults
            .iter()
            .find(|d| d.name() == name && d.extension() == extension)
            .and_then(|d| d.description_url().cloned());

        Ok(TemplateRecord::customized(name, extension, content_url, description_url))
    }

    /// Effective templates: each bundled template, replaced by its override
    /// when one exists, followed by overrides with no bundled counterpart.
    pub fn templates(&self) -> Vec<&TemplateRecord> {
        let mut merged: Vec<&TemplateRecord> = self
            .defaults
            .iter()
            .map(|d| self.override_for(d).unwrap_or(d))
            .collect();

        for custom in &self.customized {
            let has_default = self
                .defaults
                .iter()
                .any(|d| d.name() == custom.name() && d.extension() == custom.extension());
            if !has_default {
                merged.push(custom);
            }
        }

        merged
    }

    fn override_for(&self, record: &TemplateRecord) -> Option<&TemplateRecord> {
        self.customized
            .iter()
            .find(|c| c.name() == record.name() && c.extension() == record.extension())
    }

    /// Look up an effective template by `{name}.{extension}`.
    pub fn find(&self, qualified_name: &str) -> Option<&TemplateRecord> {
        self.templates()
            .into_iter()
            .find(|t| t.qualified_name() == qualified_name)
    }
}
