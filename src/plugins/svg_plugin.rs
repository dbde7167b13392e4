// SVG Plugin: compiles vector images into framework components

use crate::core::plugin::{PluginCapability, PluginDescriptor, PluginFactory};

/// Factory for the SVG-to-component plugin.
///
/// Imported .svg files become renderable components instead of asset URLs,
/// so the descriptor sits in the transform chain rather than the asset
/// router.
pub struct SvgComponentPlugin;

impl SvgComponentPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgComponentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginFactory for SvgComponentPlugin {
    fn name(&self) -> &'static str {
        "svg-component"
    }

    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(self.name(), vec![PluginCapability::TransformSource])
    }
}
