//! Plugin descriptors and registries.

use std::fmt;
use std::sync::Arc;

use stencil_common_config::PluginConfig;
use tracing::debug;

use crate::resource::{DirectoryResourceProvider, ResourceProvider};
use crate::Result;

/// One installed plugin and the provider exposing its resources.
#[derive(Clone)]
pub struct PluginDescriptor {
    id: String,
    enabled: bool,
    provider: Arc<dyn ResourceProvider>,
}

impl PluginDescriptor {
    /// Create an enabled plugin.
    pub fn new(id: impl Into<String>, provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            provider,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Provider shared by every descriptor it was registered with.
    pub fn provider(&self) -> &Arc<dyn ResourceProvider> {
        &self.provider
    }
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("id", &self.id)
            .field("enabled", &self.enabled)
            .field("urls", &self.provider.urls())
            .finish()
    }
}

/// Source of installed plugins.
pub trait PluginRegistry: Send + Sync {
    /// Every installed plugin, enabled or not, in load order.
    fn plugins(&self) -> &[PluginDescriptor];
}

/// Registry over a fixed list of plugins.
#[derive(Debug, Clone, Default)]
pub struct StaticPluginRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl StaticPluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin; load order is registration order.
    pub fn register(&mut self, plugin: PluginDescriptor) {
        debug!(plugin = plugin.id(), enabled = plugin.is_enabled(), "registered plugin");
        self.plugins.push(plugin);
    }

    pub fn with_plugin(mut self, plugin: PluginDescriptor) -> Self {
        self.register(plugin);
        self
    }

    /// Build one directory-backed plugin per configured entry.
    pub fn from_config(plugins: &[PluginConfig]) -> Result<Self> {
        let mut registry = Self::new();
        for config in plugins {
            let provider = DirectoryResourceProvider::new(&config.roots)?;
            registry.register(
                PluginDescriptor::new(config.id.clone(), Arc::new(provider))
                    .with_enabled(config.enabled),
            );
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl PluginRegistry for StaticPluginRegistry {
    fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }
}
