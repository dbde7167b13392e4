// React Plugin: JSX/React transform for application source

use crate::core::plugin::{PluginCapability, PluginDescriptor, PluginFactory};

/// Factory for the framework transform plugin.
///
/// Runs after instrumentation so injected counters survive the JSX
/// rewrite, and before alias resolution.
pub struct ReactPlugin {
    jsx_runtime: &'static str,
}

impl ReactPlugin {
    pub fn new() -> Self {
        Self {
            jsx_runtime: "automatic",
        }
    }
}

impl Default for ReactPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginFactory for ReactPlugin {
    fn name(&self) -> &'static str {
        "react"
    }

    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(self.name(), vec![PluginCapability::TransformSource])
            .with_option("jsxRuntime", self.jsx_runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_descriptor_defaults() {
        let descriptor = ReactPlugin::new().descriptor();

        assert_eq!(descriptor.name, "react");
        assert!(descriptor.has_capability(PluginCapability::TransformSource));
        assert_eq!(
            descriptor.options.get("jsxRuntime"),
            Some(&Value::from("automatic"))
        );
    }
}
