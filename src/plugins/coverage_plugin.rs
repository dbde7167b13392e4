// Coverage Plugin: injects coverage-tracking counters into application source

use crate::core::plugin::{PluginCapability, PluginDescriptor, PluginFactory};
use serde_json::Value;

/// Factory for the coverage instrumentation plugin.
///
/// Only the application's own source tree is instrumented; dependency code
/// is excluded. Instrumentation is forced even in production builds, but the
/// transform re-checks the enabling environment variable at run time so an
/// artifact built without the flag can never ship instrumented code.
pub struct CoveragePlugin {
    include: String,
    exclude: Vec<String>,
    extensions: Vec<String>,
    instrument_production: bool,
    require_env: bool,
}

impl CoveragePlugin {
    pub fn new() -> Self {
        Self {
            include: "src/*".to_string(),
            exclude: vec!["node_modules".to_string()],
            extensions: [".js", ".jsx", ".ts", ".tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            instrument_production: true,
            require_env: true,
        }
    }
}

impl Default for CoveragePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginFactory for CoveragePlugin {
    fn name(&self) -> &'static str {
        "coverage"
    }

    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(self.name(), vec![PluginCapability::TransformSource])
            .with_option("include", self.include.clone())
            .with_option(
                "exclude",
                Value::Array(self.exclude.iter().cloned().map(Value::from).collect()),
            )
            .with_option(
                "extensions",
                Value::Array(self.extensions.iter().cloned().map(Value::from).collect()),
            )
            .with_option("instrumentInProduction", self.instrument_production)
            .with_option("requireEnv", self.require_env)
    }
}
