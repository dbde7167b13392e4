// Output routing: which template an emitted asset lands in, and how the
// [name]/[hash]/[ext] tokens resolve to a concrete cache-busted path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([a-z]+)\]").expect("valid token pattern"));

/// Hex chars of the blake3 digest embedded in output filenames
const HASH_LEN: usize = 8;

/// Asset category inferred from the emitted file's suffix.
///
/// Scripts never reach this classification: entry points and code-split
/// chunks are routed through the dedicated entry/chunk template fields on
/// `OutputOptions`, not through the generic asset router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Stylesheet,
    Media,
}

impl AssetKind {
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".css") {
            AssetKind::Stylesheet
        } else {
            AssetKind::Media
        }
    }
}

/// Output path template with `[name]`, `[hash]` and optional `[ext]` tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileNameTemplate(String);

impl FileNameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token names present in the template, in order of appearance
    pub fn tokens(&self) -> Vec<&str> {
        TOKEN_RE
            .captures_iter(&self.0)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Materialize the template for one asset.
    ///
    /// `[name]` takes the logical stem, `[ext]` the suffix, and `[hash]` a
    /// short content digest, so byte-different contents for the same logical
    /// asset never collide while byte-identical contents may share a cache
    /// entry.
    pub fn resolve(&self, logical_name: &str, content: &[u8]) -> String {
        let (stem, ext) = match logical_name.rsplit_once('.') {
            Some((stem, ext)) => (stem, ext),
            None => (logical_name, ""),
        };

        let hex = blake3::hash(content).to_hex();
        let hash = &hex[..HASH_LEN];

        self.0
            .replace("[name]", stem)
            .replace("[hash]", hash)
            .replace("[ext]", ext)
    }
}

/// Suffix-driven routes for generic (non-script) assets.
///
/// Scripts are deliberately not represented here; the bundler runtime emits
/// chunks through the entry/chunk template fields and everything else
/// through this router, and the two paths stay separate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRoutes {
    pub stylesheet: FileNameTemplate,
    pub media: FileNameTemplate,
}

impl AssetRoutes {
    /// The fixed layout under the static assets directory
    pub fn standard() -> Self {
        Self {
            stylesheet: FileNameTemplate::new("static/css/[name].[hash].[ext]"),
            media: FileNameTemplate::new("static/media/[name].[hash].[ext]"),
        }
    }

    /// Pick the template for an emitted asset by its suffix
    pub fn route(&self, asset_name: &str) -> &FileNameTemplate {
        match AssetKind::from_name(asset_name) {
            AssetKind::Stylesheet => &self.stylesheet,
            AssetKind::Media => &self.media,
        }
    }
}
