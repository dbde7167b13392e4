use crate::utils::{Logger, Result, StrataError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

/// Flag controlling coverage instrumentation. Instrumentation is enabled
/// only when the value is exactly the literal string "true".
pub const COVERAGE_FLAG: &str = "STRATA_COVERAGE";

static ENV_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid env key pattern"));

/// Environment flags threaded into the pipeline derivation.
///
/// The derivation never reads the process environment directly; callers load
/// flags here (from .env files and/or the process environment) and pass the
/// map in explicitly. A `BTreeMap` keeps iteration and serialization stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvFlags {
    variables: BTreeMap<String, String>,
}

impl EnvFlags {
    /// Create an empty flag map
    pub fn new() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    /// Load flags from .env files layered by mode
    pub fn load_from_files(root: &Path, mode: &str) -> Result<Self> {
        let mut flags = Self::new();

        // Priority order (lowest to highest):
        // 1. .env (committed to repo)
        // 2. .env.local (gitignored)
        // 3. .env.{mode}
        // 4. .env.{mode}.local (gitignored)
        let env_files = vec![
            root.join(".env"),
            root.join(".env.local"),
            root.join(format!(".env.{}", mode)),
            root.join(format!(".env.{}.local", mode)),
        ];

        for env_file in env_files {
            if env_file.exists() {
                flags.load_env_file(&env_file)?;
            }
        }

        // Built-in variables derived from the mode
        flags.variables.insert("MODE".to_string(), mode.to_string());
        flags.variables.insert(
            "DEV".to_string(),
            if mode == "development" { "true" } else { "false" }.to_string(),
        );
        flags.variables.insert(
            "PROD".to_string(),
            if mode == "production" { "true" } else { "false" }.to_string(),
        );

        Logger::debug(&format!("Loaded {} environment flags", flags.variables.len()));

        Ok(flags)
    }

    /// Load variables from a single .env file
    fn load_env_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(StrataError::Io)?;

        Logger::debug(&format!("Loading env file: {}", path.display()));

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_env_line(line) {
                self.variables.insert(key, value);
            } else {
                Logger::warn(&format!(
                    "Invalid env line in {} at line {}: {}",
                    path.display(),
                    line_num + 1,
                    line
                ));
            }
        }

        Ok(())
    }

    /// Parse a single KEY=VALUE line
    fn parse_env_line(line: &str) -> Option<(String, String)> {
        let eq_pos = line.find('=')?;

        let key = line[..eq_pos].trim();
        let value = line[eq_pos + 1..].trim();

        if !ENV_KEY_RE.is_match(key) {
            return None;
        }

        // Remove surrounding quotes from the value if present
        let value = if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
            || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
        {
            &value[1..value.len() - 1]
        } else {
            value
        };

        Some((key.to_string(), value.to_string()))
    }

    /// Overlay variables on top of the file-loaded ones.
    ///
    /// Process variables win over .env files, so the CLI calls this with
    /// `std::env::vars()` after loading.
    pub fn overlay(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in vars {
            self.variables.insert(key, value);
        }
    }

    /// Set a single flag
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Get a flag value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// All flags, in stable key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether coverage instrumentation is requested.
    ///
    /// Any value other than the exact literal "true" (including unset)
    /// leaves instrumentation off.
    pub fn coverage_enabled(&self) -> bool {
        self.get(COVERAGE_FLAG) == Some("true")
    }
}

impl FromIterator<(String, String)> for EnvFlags {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_env_line() {
        assert_eq!(
            EnvFlags::parse_env_line("KEY=value"),
            Some(("KEY".to_string(), "value".to_string()))
        );

        assert_eq!(
            EnvFlags::parse_env_line("KEY=\"quoted value\""),
            Some(("KEY".to_string(), "quoted value".to_string()))
        );

        assert_eq!(
            EnvFlags::parse_env_line("KEY='single quoted'"),
            Some(("KEY".to_string(), "single quoted".to_string()))
        );

        // Invalid lines
        assert_eq!(EnvFlags::parse_env_line("INVALID"), None);
        assert_eq!(EnvFlags::parse_env_line("123KEY=value"), None);
        assert_eq!(EnvFlags::parse_env_line("BAD-KEY=value"), None);
    }

    #[test]
    fn test_load_from_files() {
        let temp_dir = tempdir().unwrap();
        let env_file = temp_dir.path().join(".env");

        let mut file = std::fs::File::create(&env_file).unwrap();
        writeln!(file, "# Comment line").unwrap();
        writeln!(file, "API_URL=https://auth.example.com").unwrap();
        writeln!(file, "STRATA_COVERAGE=true").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "PORT=8080").unwrap();

        let flags = EnvFlags::load_from_files(temp_dir.path(), "development").unwrap();

        assert_eq!(flags.get("API_URL"), Some("https://auth.example.com"));
        assert_eq!(flags.get("PORT"), Some("8080"));
        assert_eq!(flags.get("MODE"), Some("development"));
        assert_eq!(flags.get("DEV"), Some("true"));
        assert_eq!(flags.get("PROD"), Some("false"));
        assert!(flags.coverage_enabled());
    }

    #[test]
    fn test_mode_file_overrides_base() {
        let temp_dir = tempdir().unwrap();

        std::fs::write(temp_dir.path().join(".env"), "TOKEN=base\n").unwrap();
        std::fs::write(temp_dir.path().join(".env.production"), "TOKEN=prod\n").unwrap();

        let flags = EnvFlags::load_from_files(temp_dir.path(), "production").unwrap();
        assert_eq!(flags.get("TOKEN"), Some("prod"));
    }

    #[test]
    fn test_overlay_wins() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join(".env"), "TOKEN=file\n").unwrap();

        let mut flags = EnvFlags::load_from_files(temp_dir.path(), "development").unwrap();
        flags.overlay(vec![("TOKEN".to_string(), "process".to_string())]);

        assert_eq!(flags.get("TOKEN"), Some("process"));
    }

    #[test]
    fn test_coverage_enabled_requires_exact_literal() {
        let mut flags = EnvFlags::new();
        assert!(!flags.coverage_enabled());

        for value in ["TRUE", "True", "1", "yes", "false", ""] {
            flags.set(COVERAGE_FLAG, value);
            assert!(!flags.coverage_enabled(), "value {:?} should not enable", value);
        }

        flags.set(COVERAGE_FLAG, "true");
        assert!(flags.coverage_enabled());
    }
}
