//! The default template loading pass.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use stencil_common_config::TemplatesConfig;
use stencil_common_i18n::{detect_locale_with_override, Locale};
use tracing::{debug, error, info, info_span, trace, warn};
use url::Url;

use crate::category::{
    Category, CODE_TEMPLATES_CATEGORY, DEFAULT_TEMPLATES_CATEGORY, INCLUDES_TEMPLATES_CATEGORY,
    INTERNAL_TEMPLATES_CATEGORY, J2EE_TEMPLATES_CATEGORY,
};
use crate::classify::{claiming_index, namespace_prefix, partition, split_template_path};
use crate::description::resolve_description;
use crate::enumerate::enumerate_roots;
use crate::filetype::FileTypeRegistry;
use crate::manager::CategoryManager;
use crate::plugin::PluginRegistry;
use crate::record::TemplateRecord;
use crate::resource::{child_url, list_relative_paths};
use crate::Result;

/// Inputs of a loading pass.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Configuration root; category directories live beneath it.
    pub config_dir: PathBuf,
    /// Resource directory name asked of every provider.
    pub root_name: String,
    /// Locale used to pick descriptions.
    pub locale: Locale,
}

impl LoaderOptions {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            root_name: stencil_common_config::DEFAULT_ROOT_NAME.to_string(),
            locale: Locale::default(),
        }
    }

    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Options from resolved configuration. The configured locale wins over
    /// the environment.
    pub fn from_config(config: &TemplatesConfig) -> Self {
        Self {
            config_dir: config.config_dir.clone(),
            root_name: config.root_name.clone(),
            locale: detect_locale_with_override(config.locale.as_deref()),
        }
    }
}

/// Discovers plugin-bundled templates and sorts them into category managers.
///
/// The pass runs once on construction and again on [`reload`]. Nothing in
/// it is fatal: failing providers, roots and templates are logged and
/// skipped.
///
/// [`reload`]: Self::reload
pub struct TemplatesLoader {
    options: LoaderOptions,
    registry: Arc<dyn PluginRegistry>,
    file_types: Arc<dyn FileTypeRegistry>,
    managers: Vec<CategoryManager>,
    roots: Vec<Url>,
    default_template_description: Option<Url>,
    default_include_description: Option<Url>,
}

// Positions in `Category::standard` order
const DEFAULT_INDEX: usize = 0;
const INTERNAL_INDEX: usize = 1;
const INCLUDES_INDEX: usize = 2;
const CODE_INDEX: usize = 3;
const J2EE_INDEX: usize = 4;

impl TemplatesLoader {
    /// Create the loader and run the loading pass.
    pub fn new(
        options: LoaderOptions,
        registry: Arc<dyn PluginRegistry>,
        file_types: Arc<dyn FileTypeRegistry>,
    ) -> Self {
        let mut loader = Self {
            options,
            registry,
            file_types,
            managers: Vec::new(),
            roots: Vec::new(),
            default_template_description: None,
            default_include_description: None,
        };
        loader.load();
        loader
    }

    /// Discard every record and run the pass again.
    pub fn reload(&mut self) {
        self.load();
    }

    fn load(&mut self) {
        let span = info_span!(
            "load_default_templates",
            root_name = %self.options.root_name,
            locale = %self.options.locale,
        );
        let _guard = span.enter();

        self.managers = Category::standard(&self.options.config_dir)
            .into_iter()
            .map(CategoryManager::new)
            .collect();
        self.default_template_description = None;
        self.default_include_description = None;

        let prefixes: Vec<String> = self
            .managers
            .iter()
            .map(|m| namespace_prefix(&self.options.config_dir, m.config_root()))
            .collect();

        self.roots = enumerate_roots(self.registry.as_ref(), &self.options.root_name);
        for root in self.roots.clone() {
            if let Err(e) = self.load_root(&root, &prefixes) {
                error!(root = %root, error = %e, "failed to list template root");
            }
        }

        let file_types = self.file_types.as_ref();
        for manager in &mut self.managers {
            if let Err(e) = manager.load_customized_content(file_types) {
                warn!(
                    category = manager.name(),
                    error = %e,
                    "failed to load customized templates"
                );
            }
        }

        info!(
            roots = self.roots.len(),
            templates = self.managers.iter().map(|m| m.default_templates().len()).sum::<usize>(),
            "loaded default templates"
        );
    }

    fn load_root(&mut self, root: &Url, prefixes: &[String]) -> Result<()> {
        let paths = list_relative_paths(root)?;
        let contents = partition(&paths);
        debug!(
            root = %root,
            templates = contents.templates.len(),
            descriptions = contents.descriptions.len(),
            "classified template root"
        );

        if self.default_template_description.is_none() {
            self.default_template_description = contents
                .default_description
                .and_then(|path| resolve_child(root, path));
        }
        if self.default_include_description.is_none() {
            self.default_include_description = contents
                .include_description
                .and_then(|path| resolve_child(root, path));
        }

        for &path in &contents.templates {
            let Some(index) = claiming_index(path, prefixes) else {
                trace!(path, "no category claims template");
                continue;
            };

            match self.bundled_record(root, path, &prefixes[index], &contents.descriptions) {
                Ok(record) => self.managers[index].add_default_template(record),
                Err(e) => warn!(root = %root, path, error = %e, "skipping template"),
            }
        }

        Ok(())
    }

    fn bundled_record(
        &self,
        root: &Url,
        path: &str,
        prefix: &str,
        descriptions: &HashSet<&str>,
    ) -> Result<TemplateRecord> {
        let (name, extension) = split_template_path(path, prefix, self.file_types.as_ref())?;
        let content_url = child_url(root, path)?;
        let description_url = resolve_description(
            prefix,
            &name,
            &extension,
            descriptions,
            &self.options.locale,
        )
        .map(|description| child_url(root, &description))
        .transpose()?;

        Ok(TemplateRecord::bundled(name, extension, content_url, description_url))
    }

    pub fn config_dir(&self) -> &Path {
        &self.options.config_dir
    }

    pub fn locale(&self) -> &Locale {
        &self.options.locale
    }

    /// Resource roots processed by the last pass, in processing order.
    pub fn roots(&self) -> &[Url] {
        &self.roots
    }

    /// Root-level `default.html` of the first root shipping one.
    pub fn default_template_description(&self) -> Option<&Url> {
        self.default_template_description.as_ref()
    }

    /// `includes/default.html` of the first root shipping one.
    pub fn default_include_description(&self) -> Option<&Url> {
        self.default_include_description.as_ref()
    }

    /// Every category manager, in declared order.
    pub fn all_managers(&self) -> &[CategoryManager] {
        &self.managers
    }

    /// Manager of the category called `name`.
    pub fn manager(&self, name: &str) -> Option<&CategoryManager> {
        self.managers.iter().find(|m| m.name() == name)
    }

    pub fn default_manager(&self) -> &CategoryManager {
        &self.managers[DEFAULT_INDEX]
    }

    pub fn internal_manager(&self) -> &CategoryManager {
        &self.managers[INTERNAL_INDEX]
    }

    /// Manager of include fragments.
    pub fn patterns_manager(&self) -> &CategoryManager {
        &self.managers[INCLUDES_INDEX]
    }

    pub fn code_manager(&self) -> &CategoryManager {
        &self.managers[CODE_INDEX]
    }

    pub fn j2ee_manager(&self) -> &CategoryManager {
        &self.managers[J2EE_INDEX]
    }

    /// Names of the standard categories, in declared order.
    pub fn category_names() -> [&'static str; 5] {
        [
            DEFAULT_TEMPLATES_CATEGORY,
            INTERNAL_TEMPLATES_CATEGORY,
            INCLUDES_TEMPLATES_CATEGORY,
            CODE_TEMPLATES_CATEGORY,
            J2EE_TEMPLATES_CATEGORY,
        ]
    }
}

fn resolve_child(root: &Url, path: &str) -> Option<Url> {
    match child_url(root, path) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(root = %root, path, error = %e, "skipping default description");
            None
        }
    }
}

impl std::fmt::Debug for TemplatesLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplatesLoader")
            .field("options", &self.options)
            .field("roots", &self.roots)
            .field("managers", &self.managers)
            .finish_non_exhaustive()
    }
}
