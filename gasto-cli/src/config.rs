use anyhow::{Context, Result};
use gasto_core::DEFAULT_PACKAGE_FILTER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_gasto_home, gasto_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub notifications: NotificationSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackendSection {
    /// Scheme + host + port of the records API
    pub base_url: String,
    pub expenses_path: String,
    pub incomes_path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationSection {
    /// Only notifications whose package contains this substring are classified
    pub package_filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSection {
    /// tracing EnvFilter directive used when RUST_LOG is unset
    pub filter: String,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            // host loopback as seen from the Android emulator
            base_url: "http://10.0.2.2:8080".to_string(),
            expenses_path: "/api/gastos".to_string(),
            incomes_path: "/api/receitas".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for NotificationSection {
    fn default() -> Self {
        Self {
            package_filter: DEFAULT_PACKAGE_FILTER.to_string(),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl BackendSection {
    pub fn expenses_url(&self) -> String {
        join_url(&self.base_url, &self.expenses_path)
    }

    pub fn incomes_url(&self) -> String {
        join_url(&self.base_url, &self.incomes_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(gasto_home()?.join("config.toml"))
}

/// Read the config file, falling back to defaults when it does not exist.
pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    ensure_gasto_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.backend.expenses_url(), "http://10.0.2.2:8080/api/gastos");
        assert_eq!(cfg.backend.incomes_url(), "http://10.0.2.2:8080/api/receitas");
        assert_eq!(cfg.log.filter, "info");
        assert_eq!(cfg.notifications.package_filter, "savemoney");
    }

    #[test]
    fn test_package_filter_override() {
        let cfg = parse_config("[notifications]\npackage_filter = \"br.com.bank\"").unwrap();
        assert_eq!(cfg.notifications.package_filter, "br.com.bank");
        assert_eq!(cfg.backend, BackendSection::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg = parse_config(
            r#"
[backend]
base_url = "https://gastos.example.com/"
"#,
        )
        .unwrap();
        assert_eq!(cfg.backend.expenses_url(), "https://gastos.example.com/api/gastos");
        assert_eq!(cfg.backend.timeout_secs, 10);
        assert_eq!(cfg.log, LogSection::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.log.filter = "gasto_ingest=debug".to_string();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(parse_config(&s).unwrap(), cfg);
    }

    #[test]
    fn test_rejects_bad_types() {
        assert!(parse_config("[backend]\ntimeout_secs = \"ten\"").is_err());
    }
}
