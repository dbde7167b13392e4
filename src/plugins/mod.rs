// Plugin factories for the strata pipeline

pub mod alias_plugin;
pub mod coverage_plugin;
pub mod lint_plugin;
pub mod react_plugin;
pub mod svg_plugin;

pub use alias_plugin::AliasPlugin;
pub use coverage_plugin::CoveragePlugin;
pub use lint_plugin::LintPlugin;
pub use react_plugin::ReactPlugin;
pub use svg_plugin::SvgComponentPlugin;
