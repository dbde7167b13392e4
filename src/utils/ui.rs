use console::style;
use std::time::Instant;

/// Terminal output for the CLI, kept separate from tracing-based logging
pub struct StrataUI {
    start_time: Instant,
}

impl StrataUI {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn show_banner(&self) {
        println!(
            "\n  {} {}",
            style("STRATA").cyan().bold(),
            style(concat!("v", env!("CARGO_PKG_VERSION"))).white()
        );
        println!();
    }

    pub fn show_plugin_chain(&self, names: &[&str]) {
        for name in names {
            println!("  {} {}", style("plugin").black().bright(), style(name).cyan());
        }
    }

    pub fn show_completion(&self, plugin_count: usize, outdir: &str) {
        let elapsed = self.start_time.elapsed();

        println!();
        println!(
            "  {} {} plugins, output {} ",
            style("✓").green(),
            style(plugin_count.to_string()).cyan().bold(),
            style(outdir).white()
        );
        println!(
            "  {} derived in {}",
            style("✓").green(),
            style(format!("{:.0}ms", elapsed.as_secs_f64() * 1000.0))
                .white()
                .bold()
        );
    }
}

impl Default for StrataUI {
    fn default() -> Self {
        Self::new()
    }
}
