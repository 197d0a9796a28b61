//! Runtime configuration from environment variables

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::types::{Catalog, FitdeskError, Result};

pub const DEFAULT_CENTER: &str = "Baun Fitness Center";
pub const DEFAULT_EXPORT_PATH: &str = "fitness_session_summary.txt";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit catalog file; when unset the per-user catalog is tried
    pub catalog_path: Option<PathBuf>,
    pub export_path: PathBuf,
    pub center: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            center: DEFAULT_CENTER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Build configuration from a key lookup, so tests need not touch the
    /// process environment.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut get = |k: &str| get(k).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            catalog_path: get("FITDESK_CATALOG").map(PathBuf::from),
            export_path: get("FITDESK_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_path),
            center: get("FITDESK_CENTER").unwrap_or(defaults.center),
            log_filter: get("FITDESK_LOG")
                .or_else(|| get("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        }
    }

    /// Per-user catalog location (`~/.fitdesk/catalog.json`)
    pub fn user_catalog_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(".fitdesk").join("catalog.json"))
    }

    /// Load the reference catalog.
    ///
    /// An explicit path must exist. Otherwise the per-user file is used when
    /// present, and the built-in tables when it is not.
    pub fn load_catalog(&self) -> Result<Catalog> {
        if let Some(path) = &self.catalog_path {
            return load_catalog_file(path);
        }
        match Self::user_catalog_path() {
            Some(path) if path.exists() => load_catalog_file(&path),
            _ => {
                tracing::debug!("using built-in catalog");
                Ok(Catalog::default())
            }
        }
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        FitdeskError::Config(format!("cannot read catalog {}: {}", path.display(), e))
    })?;
    let catalog = Catalog::from_json(&content)?;
    tracing::info!(
        path = %path.display(),
        plans = catalog.plans.len(),
        promo_codes = catalog.promo_codes.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Install the stderr tracing subscriber
pub fn init_logging(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    // An already-installed global subscriber keeps its configuration
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn from_env_defaults() {
        let cfg = Config::from_env_with(|_| None);
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.center, "Baun Fitness Center");
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "FITDESK_CATALOG" => Some("/tmp/catalog.json".into()),
            "FITDESK_EXPORT_PATH" => Some("out/summary.txt".into()),
            "FITDESK_CENTER" => Some("Downtown Gym".into()),
            "RUST_LOG" => Some("debug".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get);
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(cfg.export_path, PathBuf::from("out/summary.txt"));
        assert_eq!(cfg.center, "Downtown Gym");
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn from_env_prefers_fitdesk_log() {
        let get = |k: &str| match k {
            "FITDESK_LOG" => Some("info".into()),
            "RUST_LOG" => Some("trace".into()),
            _ => None,
        };
        assert_eq!(Config::from_env_with(get).log_filter, "info");
    }

    #[test]
    fn from_env_ignores_blank_values() {
        let get = |k: &str| match k {
            "FITDESK_CENTER" => Some("  ".into()),
            _ => None,
        };
        assert_eq!(Config::from_env_with(get).center, DEFAULT_CENTER);
    }

    #[test]
    fn load_catalog_from_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(&path, r#"{"plans": {"Gold": 90.0}}"#).unwrap();

        let cfg = Config {
            catalog_path: Some(path),
            ..Config::default()
        };
        let catalog = cfg.load_catalog().unwrap();
        assert_eq!(catalog.plan_names(), vec!["Gold"]);
        assert_eq!(catalog.promo_codes, Catalog::default().promo_codes);
    }

    #[test]
    fn load_catalog_missing_explicit_path_errors() {
        let tmp = TempDir::new().unwrap();
        let cfg = Config {
            catalog_path: Some(tmp.path().join("missing.json")),
            ..Config::default()
        };
        assert!(matches!(cfg.load_catalog(), Err(FitdeskError::Config(_))));
    }

    #[test]
    fn init_logging_twice_keeps_first_subscriber() {
        init_logging("warn");
        init_logging("not a [valid filter");
        tracing::warn!("still logging after a second init");
    }
}
