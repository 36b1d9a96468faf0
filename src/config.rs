use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::Timings;
use crate::chat::{DailyQuota, Tier};

pub const DEFAULT_CONFIG_PATH: &str = "config/chatflow.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page shown on startup.
    pub default_tier: Tier,
    /// Free plan ceiling and the count it starts the day with.
    pub daily_limit: u32,
    pub daily_used: u32,
    pub submit_delay_ms: u64,
    pub social_delay_ms: u64,
    pub toast_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_tier: Tier::Free,
            daily_limit: 100,
            daily_used: 87,
            submit_delay_ms: 2000,
            social_delay_ms: 1500,
            toast_seconds: 4,
        }
    }
}

impl AppConfig {
    pub fn quota(&self) -> DailyQuota {
        DailyQuota::new(self.daily_used, self.daily_limit)
    }

    pub fn timings(&self) -> Timings {
        Timings {
            submit: Duration::from_millis(self.submit_delay_ms),
            social: Duration::from_millis(self.social_delay_ms),
        }
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

pub fn try_load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match try_load_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
        Err(err) => {
            log::warn!("Failed to parse config file {}: {err}", path.display());
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("chatflow-{name}-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = scratch_dir("missing");
        let path = dir.join("nope.json");
        assert_eq!(load_config(path.to_str().unwrap()), AppConfig::default());
    }

    #[test]
    fn garbage_file_uses_defaults() {
        let dir = scratch_dir("garbage");
        let path = dir.join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(try_load_config(&path), Err(ConfigError::Json(_))));
        assert_eq!(load_config(path.to_str().unwrap()), AppConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = scratch_dir("partial");
        let path = dir.join("partial.json");
        fs::write(&path, r#"{ "default_tier": "business", "daily_used": 99 }"#).unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.default_tier, Tier::Business);
        assert_eq!(config.daily_used, 99);
        assert_eq!(config.daily_limit, 100);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = scratch_dir("save");
        let path = dir.join("nested").join("chatflow.json");
        let path = path.to_str().unwrap();
        let config = AppConfig {
            default_tier: Tier::Enterprise,
            submit_delay_ms: 0,
            ..AppConfig::default()
        };

        save_config(path, &config).unwrap();
        assert_eq!(load_config(path), config);
    }

    #[test]
    fn derived_settings() {
        let config = AppConfig::default();
        assert_eq!(config.quota(), DailyQuota::new(87, 100));
        assert_eq!(config.timings(), Timings::default());
        assert_eq!(config.toast_lifetime(), Duration::from_secs(4));
    }
}
