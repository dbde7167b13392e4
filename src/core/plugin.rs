// Plugin descriptors for the strata pipeline
// The configurator treats plugins as opaque, order-significant values

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// What a plugin is allowed to do with source handed to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginCapability {
    /// Rewrites source before it reaches the next plugin
    TransformSource,
    /// Inspects source without changing it
    AnalyzeSource,
}

/// An opaque unit of bundler behavior.
///
/// The configurator never inspects a descriptor's internals; it only decides
/// whether a factory's output is included and where it sits in the chain.
/// Options are an opaque JSON map handed through to the external runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub capabilities: Vec<PluginCapability>,
    pub options: BTreeMap<String, Value>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, capabilities: Vec<PluginCapability>) -> Self {
        Self {
            name: name.into(),
            capabilities,
            options: BTreeMap::new(),
        }
    }

    /// Attach an option value
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn has_capability(&self, capability: PluginCapability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// Factory for one external plugin's descriptor.
///
/// Factories are polymorphic over the narrow transform/analyze capability;
/// the pipeline composes their outputs without branching on identity.
pub trait PluginFactory {
    /// Stable plugin name
    fn name(&self) -> &'static str;

    /// Build the descriptor handed to the bundler runtime
    fn descriptor(&self) -> PluginDescriptor;
}

/// Collapse optional plugin slots into the final ordered chain.
///
/// A disabled plugin is absent entirely, never present-but-inert, and
/// omitting a slot does not shift the relative order of the others.
pub fn compose<const N: usize>(slots: [Option<PluginDescriptor>; N]) -> Vec<PluginDescriptor> {
    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> PluginDescriptor {
        PluginDescriptor::new(name, vec![PluginCapability::TransformSource])
    }

    #[test]
    fn test_compose_collapses_empty_slots() {
        let chain = compose([
            Some(descriptor("first")),
            None,
            Some(descriptor("second")),
            Some(descriptor("third")),
        ]);

        let names: Vec<&str> = chain.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_compose_preserves_order_with_filled_slot() {
        let without = compose([Some(descriptor("a")), None, Some(descriptor("b"))]);
        let with = compose([
            Some(descriptor("a")),
            Some(descriptor("x")),
            Some(descriptor("b")),
        ]);

        assert_eq!(without[0].name, "a");
        assert_eq!(without[1].name, "b");
        assert_eq!(with[0].name, "a");
        assert_eq!(with[2].name, "b");
    }

    #[test]
    fn test_with_option() {
        let plugin = descriptor("lint").with_option("cache", false);
        assert_eq!(plugin.options.get("cache"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_has_capability() {
        let plugin = descriptor("transform");
        assert!(plugin.has_capability(PluginCapability::TransformSource));
        assert!(!plugin.has_capability(PluginCapability::AnalyzeSource));
    }
}
