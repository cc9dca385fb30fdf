use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bus::DEFAULT_EVENTS_CAPACITY;
use crate::error::{CoreError, CoreResult};
use crate::home::DEFAULT_JOURNAL_CAPACITY;
use crate::utils::time::now_secs;

pub const CONFIG_FILENAME: &str = "shopfront.json";
pub const CONFIG_VERSION: &str = "1.0.0";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopfrontConfig {
    pub version: String,
    pub created_at: u64,
    pub last_modified: u64,
    /// Base URL of the upstream store API.
    pub api_base_url: String,
    /// Base URL that serves uploaded assets (category images).
    pub asset_base_url: String,
    /// Address the HTTP surface binds to.
    pub bind_addr: String,
    /// Optional per-request timeout for upstream fetches. Off by
    /// default; a hung fetch then hangs the search pass.
    pub request_timeout_secs: Option<u64>,
    pub events_capacity: usize,
    pub journal_capacity: usize,
}

impl ShopfrontConfig {
    pub fn default_new() -> Self {
        let now = now_secs();
        Self {
            version: CONFIG_VERSION.to_string(),
            created_at: now,
            last_modified: now,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            asset_base_url: DEFAULT_API_BASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout_secs: None,
            events_capacity: DEFAULT_EVENTS_CAPACITY,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }

    /// Applies `SHOPFRONT_*` environment variables on top of the
    /// loaded values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup("SHOPFRONT_API_URL").filter(|value| !value.is_empty()) {
            self.api_base_url = value;
        }
        if let Some(value) = lookup("SHOPFRONT_ASSET_URL").filter(|value| !value.is_empty()) {
            self.asset_base_url = value;
        }
        if let Some(value) = lookup("SHOPFRONT_BIND_ADDR").filter(|value| !value.is_empty()) {
            self.bind_addr = value;
        }
        if let Some(value) =
            lookup("SHOPFRONT_REQUEST_TIMEOUT_SECS").and_then(|value| value.parse::<u64>().ok())
        {
            self.request_timeout_secs = (value > 0).then_some(value);
        }
        self
    }
}

pub fn load_or_create_config(dir: &Path) -> CoreResult<ShopfrontConfig> {
    std::fs::create_dir_all(dir).map_err(|error| {
        CoreError::Internal(format!(
            "failed to create config directory {}: {error}",
            dir.display()
        ))
    })?;

    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        let config = ShopfrontConfig::default_new();
        write_config(&path, &config)?;
        return Ok(config);
    }

    let data = std::fs::read_to_string(&path).map_err(|error| {
        CoreError::Internal(format!("failed to read config {}: {error}", path.display()))
    })?;
    let mut config: ShopfrontConfig = serde_json::from_str(&data).map_err(|error| {
        CoreError::Internal(format!("failed to parse config {}: {error}", path.display()))
    })?;

    if config.version != CONFIG_VERSION {
        config = migrate_config(config)?;
        write_config(&path, &config)?;
    }

    Ok(config)
}

pub fn migrate_config(_config: ShopfrontConfig) -> CoreResult<ShopfrontConfig> {
    Err(CoreError::NotImplemented)
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

fn write_config(path: &Path, config: &ShopfrontConfig) -> CoreResult<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        CoreError::Internal(format!(
            "failed to serialize config {}: {error}",
            path.display()
        ))
    })?;
    std::fs::write(path, data).map_err(|error| {
        CoreError::Internal(format!("failed to write config {}: {error}", path.display()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn creates_config_when_missing() {
        let dir = tempdir().expect("tempdir");
        let config = load_or_create_config(dir.path()).expect("load/create");

        let path = config_path(dir.path());
        assert!(path.exists());
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn loads_existing_config() {
        let dir = tempdir().expect("tempdir");
        let mut original = ShopfrontConfig::default_new();
        original.api_base_url = "https://store.example.com".to_string();
        let path = config_path(dir.path());
        write_config(&path, &original).expect("write config");

        let loaded = load_or_create_config(dir.path()).expect("load config");
        assert_eq!(loaded.api_base_url, "https://store.example.com");
        assert_eq!(loaded.created_at, original.created_at);
    }

    #[test]
    fn version_mismatch_invokes_migration_stub() {
        let dir = tempdir().expect("tempdir");
        let mut original = ShopfrontConfig::default_new();
        original.version = "0.9.0".to_string();
        let path = config_path(dir.path());
        write_config(&path, &original).expect("write config");

        let err = load_or_create_config(dir.path()).expect_err("expected error");
        match err {
            CoreError::NotImplemented => {}
            other => panic!("expected NotImplemented, got {other:?}"),
        }
    }

    #[test]
    fn env_overrides_take_precedence_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SHOPFRONT_API_URL", "https://api.example.com"),
            ("SHOPFRONT_BIND_ADDR", "0.0.0.0:9000"),
            ("SHOPFRONT_REQUEST_TIMEOUT_SECS", "15"),
        ]);
        let config = ShopfrontConfig::default_new()
            .with_overrides_from(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.asset_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.request_timeout_secs, Some(15));
    }

    #[test]
    fn zero_timeout_override_disables_the_timeout() {
        let mut base = ShopfrontConfig::default_new();
        base.request_timeout_secs = Some(30);
        let config = base.with_overrides_from(|key| {
            (key == "SHOPFRONT_REQUEST_TIMEOUT_SECS").then(|| "0".to_string())
        });
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn malformed_timeout_override_is_ignored() {
        let config = ShopfrontConfig::default_new().with_overrides_from(|key| {
            (key == "SHOPFRONT_REQUEST_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.request_timeout_secs, None);
    }
}
