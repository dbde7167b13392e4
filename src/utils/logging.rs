use std::time::Instant;
use tracing::{debug, error, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter("strata=debug")
            .with_target(false)
            .init();
    }

    pub fn derive_start(mode: &str, root: &str) {
        info!("🧩 Strata - Pipeline Configuration");
        info!("═══════════════════════════════════════");
        info!("📁 Root: {}", root);
        info!("🎛️  Mode: {}", mode);
    }

    pub fn coverage_instrumentation(enabled: bool) {
        if enabled {
            info!("🔬 Coverage instrumentation enabled - inline sourcemaps");
        } else {
            debug!("⚡ Coverage instrumentation disabled");
        }
    }

    pub fn plugin_chain(names: &[&str]) {
        info!("🔌 Plugin chain ({} plugins):", names.len());
        for name in names {
            info!("  • {}", name);
        }
    }

    pub fn config_written(path: &str) {
        info!("📦 Configuration written to {}", path);
    }

    pub fn derive_complete(plugin_count: usize, outdir: &str) {
        info!("");
        info!("📊 Derived configuration:");
        info!("  • Active plugins: {}", plugin_count);
        info!("  • Output directory: {}", outdir);
        info!("");
        info!("✅ Configuration ready for the bundler runtime");
    }

    pub fn info(msg: &str) {
        info!("{}", msg);
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
