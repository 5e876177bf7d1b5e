//! Template resource root enumeration.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, trace};
use url::Url;

use crate::plugin::PluginRegistry;

/// Every distinct template resource root exposed by enabled plugins.
///
/// Plugins are visited in registry order. A provider shared by several
/// plugins is asked once, providers with no URLs of their own are skipped,
/// and a root reachable through two providers is kept once at its first
/// position. A provider that fails to resolve is logged and skipped.
pub fn enumerate_roots(registry: &dyn PluginRegistry, root_name: &str) -> Vec<Url> {
    let mut seen_providers: HashSet<*const ()> = HashSet::new();
    let mut seen_roots: HashSet<Url> = HashSet::new();
    let mut roots = Vec::new();

    for plugin in registry.plugins() {
        if !plugin.is_enabled() {
            trace!(plugin = plugin.id(), "skipping disabled plugin");
            continue;
        }

        let provider = plugin.provider();
        if !seen_providers.insert(Arc::as_ptr(provider) as *const ()) {
            continue;
        }
        if provider.urls().is_empty() {
            trace!(plugin = plugin.id(), "skipping provider without urls");
            continue;
        }

        let found = match provider.resources(root_name) {
            Ok(found) => found,
            Err(e) => {
                error!(plugin = plugin.id(), error = %e, "failed to resolve template roots");
                continue;
            }
        };

        for url in found {
            if seen_roots.insert(url.clone()) {
                debug!(plugin = plugin.id(), root = %url, "found template root");
                roots.push(url);
            }
        }
    }

    roots
}
