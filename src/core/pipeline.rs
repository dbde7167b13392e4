// The pipeline configurator: one pure derivation from (mode, flags) to the
// configuration consumed by the external bundler runtime.

use crate::core::models::{BuildConfiguration, BuildMode, OutputOptions, ServerOptions, SourcemapPolicy};
use crate::core::plugin::{compose, PluginDescriptor, PluginFactory};
use crate::plugins::{AliasPlugin, CoveragePlugin, LintPlugin, ReactPlugin, SvgComponentPlugin};
use crate::utils::EnvFlags;
use tracing::debug;

pub struct PipelineConfigurator;

impl PipelineConfigurator {
    /// Derive the build configuration for one invocation.
    ///
    /// Pure and total: no I/O, no clocks, identical inputs yield identical
    /// output. Flags are read from the injected map only; an absent coverage
    /// flag means no instrumentation and no sourcemaps.
    pub fn derive(mode: BuildMode, flags: &EnvFlags) -> BuildConfiguration {
        let coverage = flags.coverage_enabled();

        let sourcemap = if coverage {
            // Counters report compiled positions; inline maps let the browser
            // translate them back to source.
            SourcemapPolicy::Inline
        } else {
            SourcemapPolicy::Off
        };

        let coverage_plugin = coverage.then(|| CoveragePlugin::new().descriptor());

        // Lint first so it sees raw source; alias resolution last so the
        // engine's own resolution only sees aliased paths. The coverage slot
        // collapses away without shifting the rest.
        let plugins: Vec<PluginDescriptor> = compose([
            Some(LintPlugin::new().cache(false).descriptor()),
            coverage_plugin,
            Some(ReactPlugin::new().descriptor()),
            Some(SvgComponentPlugin::new().descriptor()),
            Some(AliasPlugin::new().descriptor()),
        ]);

        debug!(
            mode = mode.as_str(),
            coverage,
            plugins = plugins.len(),
            "derived pipeline configuration"
        );

        BuildConfiguration {
            base: "./".to_string(),
            sourcemap,
            output: OutputOptions::default(),
            server: ServerOptions::default(),
            plugins,
        }
    }
}
