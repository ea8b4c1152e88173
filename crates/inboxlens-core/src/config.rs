//! Dashboard settings that persist across sessions.
//!
//! Settings live in `<config dir>/inboxlens/settings.json`. A missing file
//! yields the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How filter setters treat values outside the known urgency, sentiment and
/// category sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Store any value as given.
    #[default]
    Permissive,
    /// Reject unknown values with [`Error::InvalidFilterValue`].
    Strict,
}

/// Persistent dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Filter value validation.
    pub filter_mode: FilterMode,
    /// Simulated smart search latency in milliseconds.
    pub search_latency_ms: u64,
    /// How many accepted queries to remember for suggestions.
    pub recent_query_limit: usize,
    /// JSON file to seed emails from instead of the sample mailbox.
    pub data_file: Option<PathBuf>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Permissive,
            search_latency_ms: 2000,
            recent_query_limit: 20,
            data_file: None,
        }
    }
}

impl DashboardSettings {
    /// Simulated search latency.
    #[must_use]
    pub const fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms)
    }

    /// Default settings file location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the platform has no config directory.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("inboxlens").join("settings.json"))
            .ok_or_else(|| Error::Config("No config directory available".to_string()))
    }

    /// Loads settings from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?).await
    }

    /// Loads settings from `path`, falling back to defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await? {
            tracing::debug!(?path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves settings to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?).await
    }

    /// Saves settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.filter_mode, FilterMode::Permissive);
        assert_eq!(settings.search_latency(), Duration::from_secs(2));
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{ "filter_mode": "strict" }"#).unwrap();

        assert_eq!(settings.filter_mode, FilterMode::Strict);
        assert_eq!(settings.search_latency_ms, 2000);
        assert_eq!(settings.recent_query_limit, 20);
    }

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DashboardSettings::load_from(&dir.path().join("settings.json"))
            .await
            .unwrap();

        assert_eq!(settings, DashboardSettings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = DashboardSettings {
            filter_mode: FilterMode::Strict,
            search_latency_ms: 250,
            recent_query_limit: 5,
            data_file: Some(PathBuf::from("/tmp/emails.json")),
        };

        settings.save_to(&path).await.unwrap();
        let loaded = DashboardSettings::load_from(&path).await.unwrap();

        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "filter_mode = strict").await.unwrap();

        let result = DashboardSettings::load_from(&path).await;

        assert!(matches!(result, Err(Error::Serde(_))));
    }
}
