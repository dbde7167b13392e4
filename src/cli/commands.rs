use crate::core::{BuildConfiguration, BuildMode, PipelineConfigurator};
use crate::utils::{EnvFlags, Logger, StrataUI, Timer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Strata - Pipeline configurator for browser asset builds")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the configuration for a one-shot build
    Build {
        /// Frontend root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Build mode (development, production, test)
        #[arg(short, long, default_value = "production")]
        mode: String,
        /// Write the configuration JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Derive the configuration for the serve/watch context
    Dev {
        /// Frontend root directory
        #[arg(short, long, default_value = ".")]
        root: String,
    },
    /// Show configurator information
    Info,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Build { root, mode, out } => {
                self.handle_build_command(&root, &mode, out.as_deref()).await
            }
            Commands::Dev { root } => self.handle_dev_command(&root).await,
            Commands::Info => self.handle_info_command().await,
        }
    }

    async fn handle_build_command(
        &self,
        root: &str,
        mode: &str,
        out: Option<&Path>,
    ) -> anyhow::Result<()> {
        let ui = StrataUI::new();
        ui.show_banner();

        let mode = BuildMode::parse(mode);
        Logger::derive_start(mode.as_str(), root);

        let config = {
            let _timer = Timer::start("derive configuration");
            let flags = self.load_flags(Path::new(root), mode)?;
            Logger::coverage_instrumentation(flags.coverage_enabled());
            PipelineConfigurator::derive(mode, &flags)
        };

        let names: Vec<&str> = config.plugins.iter().map(|p| p.name.as_str()).collect();
        ui.show_plugin_chain(&names);

        self.emit(&config, out).await?;

        ui.show_completion(config.plugins.len(), &config.output.out_dir.display().to_string());
        Ok(())
    }

    async fn handle_dev_command(&self, root: &str) -> anyhow::Result<()> {
        let ui = StrataUI::new();
        ui.show_banner();

        let mode = BuildMode::Development;
        Logger::derive_start(mode.as_str(), root);

        let flags = self.load_flags(Path::new(root), mode)?;
        Logger::coverage_instrumentation(flags.coverage_enabled());
        let config = PipelineConfigurator::derive(mode, &flags);

        // Serve/watch context: surface the dev-server settings the runtime
        // will bind to. They never influence plugins or routing.
        Logger::info(&format!(
            "🌐 Dev server: http://localhost:{} (auto-open: {})",
            config.server.port, config.server.open
        ));

        let names: Vec<&str> = config.plugins.iter().map(|p| p.name.as_str()).collect();
        Logger::plugin_chain(&names);

        self.emit(&config, None).await?;

        Logger::derive_complete(
            config.plugins.len(),
            &config.output.out_dir.display().to_string(),
        );
        Ok(())
    }

    async fn handle_info_command(&self) -> anyhow::Result<()> {
        tracing::info!("🧩 Strata v{}", env!("CARGO_PKG_VERSION"));
        tracing::info!("══════════════════════════════════════");
        tracing::info!("Pipeline configurator for browser asset builds");
        tracing::info!("");
        tracing::info!("🔌 Plugin chain:");
        tracing::info!("  • lint (cache disabled for builds)");
        tracing::info!("  • coverage instrumentation (STRATA_COVERAGE=true)");
        tracing::info!("  • react transform");
        tracing::info!("  • svg-to-component");
        tracing::info!("  • path alias resolution");
        tracing::info!("");
        tracing::info!("📂 Output layout:");
        tracing::info!("  • scripts     static/js/[name].[hash].js");
        tracing::info!("  • stylesheets static/css/[name].[hash].[ext]");
        tracing::info!("  • media       static/media/[name].[hash].[ext]");

        Ok(())
    }

    /// Load .env layers for the mode, then let process variables win
    fn load_flags(&self, root: &Path, mode: BuildMode) -> anyhow::Result<EnvFlags> {
        let mut flags = EnvFlags::load_from_files(root, mode.as_str())
            .with_context(|| format!("failed to load env files under {}", root.display()))?;
        flags.overlay(std::env::vars());
        Ok(flags)
    }

    /// Hand the configuration to the external runtime: a file when `out` is
    /// given, stdout otherwise
    async fn emit(&self, config: &BuildConfiguration, out: Option<&Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(config).context("failed to serialize configuration")?;

        match out {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                tokio::fs::write(path, &json)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                Logger::config_written(&path.display().to_string());
            }
            None => {
                println!("{}", json);
            }
        }

        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
