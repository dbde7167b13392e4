use crate::core::plugin::PluginDescriptor;
use crate::core::routing::{AssetRoutes, FileNameTemplate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Invocation context for one configuration derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
    Test,
}

impl BuildMode {
    /// Total parse: unknown mode strings fall back to development
    pub fn parse(value: &str) -> Self {
        match value {
            "production" | "prod" => BuildMode::Production,
            "test" => BuildMode::Test,
            _ => BuildMode::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
            BuildMode::Test => "test",
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sourcemap emission policy. There is no external-file variant: maps are
/// either absent or embedded inline for in-browser coverage mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcemapPolicy {
    Off,
    Inline,
}

/// Dev-server settings, consumed only in the serve/watch context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    pub port: u16,
    pub open: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            port: 3000,
            open: false,
        }
    }
}

/// Where emitted assets land.
///
/// Entry points and code-split chunks route through the dedicated template
/// fields below; generic assets route through `asset_routes` by suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Output root, the sibling server's public-asset folder
    pub out_dir: PathBuf,
    /// Clear the output root before each full build so no stale assets
    /// from a previous mode survive
    pub empty_out_dir: bool,
    /// Subdirectory for static assets
    pub assets_dir: String,
    pub entry_file_names: FileNameTemplate,
    pub chunk_file_names: FileNameTemplate,
    pub asset_routes: AssetRoutes,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("../server/public_html"),
            empty_out_dir: true,
            assets_dir: "static".to_string(),
            entry_file_names: FileNameTemplate::new("static/js/[name].[hash].js"),
            chunk_file_names: FileNameTemplate::new("static/js/[name].[hash].js"),
            asset_routes: AssetRoutes::standard(),
        }
    }
}

/// The complete configuration handed to the external bundler runtime.
///
/// Built once per derivation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Base path for generated asset URLs, relative so the artifact can be
    /// served from any mount point
    pub base: String,
    pub sourcemap: SourcemapPolicy,
    pub output: OutputOptions,
    pub server: ServerOptions,
    /// Ordered transformation chain; order is significant
    pub plugins: Vec<PluginDescriptor>,
}
