// Alias Plugin: rewrites project-defined import path shortcuts

use crate::core::plugin::{PluginCapability, PluginDescriptor, PluginFactory};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Factory for the path-alias resolution plugin.
///
/// Sits last in the chain so every earlier transform has already run by the
/// time imports are rewritten, and later resolution inside the bundler
/// engine only ever sees aliased paths. Targets are normalized before they
/// are embedded in the descriptor.
pub struct AliasPlugin {
    aliases: BTreeMap<String, String>,
}

impl AliasPlugin {
    /// The project's standard alias table
    pub fn new() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert("@".to_string(), Self::normalize_target("./src"));
        Self { aliases }
    }

    /// Add or replace one alias
    pub fn alias(mut self, name: impl Into<String>, target: &str) -> Self {
        self.aliases.insert(name.into(), Self::normalize_target(target));
        self
    }

    /// Normalize an alias target: absolute paths pass through, relative
    /// targets lose a leading "./"
    fn normalize_target(target: &str) -> String {
        if Path::new(target).is_absolute() {
            target.to_string()
        } else {
            target.strip_prefix("./").unwrap_or(target).to_string()
        }
    }
}

impl Default for AliasPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginFactory for AliasPlugin {
    fn name(&self) -> &'static str {
        "path-alias"
    }

    fn descriptor(&self) -> PluginDescriptor {
        let table: BTreeMap<String, Value> = self
            .aliases
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.clone())))
            .collect();

        PluginDescriptor::new(self.name(), vec![PluginCapability::AnalyzeSource])
            .with_option("aliases", Value::Object(table.into_iter().collect()))
    }
}
