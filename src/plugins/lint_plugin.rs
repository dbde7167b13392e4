// Lint Plugin: runs the external lint engine over raw source during builds

use crate::core::plugin::{PluginCapability, PluginDescriptor, PluginFactory};

/// Factory for the lint-on-build plugin.
///
/// Linting sits first in the chain so the engine sees raw,
/// least-transformed source. Its internal result cache is disabled for
/// builds: a cached verdict from a previous pipeline shape is worthless.
pub struct LintPlugin {
    cache: bool,
}

impl LintPlugin {
    pub fn new() -> Self {
        Self { cache: true }
    }

    /// Enable or disable the lint engine's internal cache
    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }
}

impl Default for LintPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginFactory for LintPlugin {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(self.name(), vec![PluginCapability::AnalyzeSource])
            .with_option("cache", self.cache)
    }
}
