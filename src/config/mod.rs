//
//  bitbucket-search
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loading, saving and reading configuration settings from a TOML file stored
//! in a platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/bb/config.toml`
//! - **macOS**: `~/Library/Application Support/bb/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\bb\config.toml`
//!
//! Set `BB_CONFIG_DIR` to use another directory.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [hosts."bitbucket.org"]
//! host = "bitbucket.org"
//! user = "myusername"
//! default_workspace = "myworkspace"
//! ```
//!
//! ## Environment Overrides
//!
//! Applied once by [`Config::load`]:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `BB_DEFAULT_WORKSPACE` | `default_workspace` |
//! | `BB_API_URL` | `api_url` |
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`hosts`]: Host constants and URL normalization

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`].
pub const VALID_KEYS: &[&str] = &["user", "default_workspace", "api_url"];

/// Global configuration container.
///
/// The file is keyed by host so it stays compatible with configs written by
/// the full `bb` CLI; only the Bitbucket Cloud entry is read.
///
/// # Examples
///
/// ```rust
/// use bitbucket_search::config::Config;
///
/// let mut config = Config::default();
/// assert!(config.default_workspace().is_none());
///
/// config.set("default_workspace", "myteam".to_string());
/// assert_eq!(config.default_workspace(), Some("myteam"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Host-specific configuration map, keyed by hostname.
    #[serde(default)]
    pub hosts: HashMap<String, HostConfig>,
}

/// Host-specific configuration.
///
/// # Fields
///
/// * `host` - The hostname, `bitbucket.org` for Cloud
/// * `user` - The Bitbucket username, informational
/// * `default_workspace` - Workspace used when a search names none
/// * `api_url` - API base URL override
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub default_workspace: Option<String>,

    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    /// Loads configuration from the default location and applies
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    ///
    /// A missing configuration file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads configuration from `path` without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// `BB_CONFIG_DIR` takes precedence over the platform directory.
    ///
    /// # Platform-Specific Paths
    ///
    /// | Platform | Path |
    /// |----------|------|
    /// | Linux | `~/.config/bb/config.toml` |
    /// | macOS | `~/Library/Application Support/bb/config.toml` |
    /// | Windows | `C:\Users\<User>\AppData\Roaming\bb\config.toml` |
    pub fn config_path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os("BB_CONFIG_DIR").filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }

        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlays environment variables read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(workspace) = get("BB_DEFAULT_WORKSPACE") {
            self.cloud_host_mut().default_workspace = Some(workspace);
        }
        if let Some(url) = get("BB_API_URL") {
            self.cloud_host_mut().api_url = Some(url);
        }
    }

    /// The Bitbucket Cloud host entry, if present.
    pub fn cloud_host(&self) -> Option<&HostConfig> {
        self.hosts.get(BITBUCKET_CLOUD)
    }

    /// The Bitbucket Cloud host entry, created on first use.
    pub fn cloud_host_mut(&mut self) -> &mut HostConfig {
        self.hosts
            .entry(BITBUCKET_CLOUD.to_string())
            .or_insert_with(cloud_host_config)
    }

    /// Workspace used when a search does not name one.
    pub fn default_workspace(&self) -> Option<&str> {
        self.cloud_host()
            .and_then(|h| h.default_workspace.as_deref())
            .filter(|w| !w.is_empty())
    }

    /// API base URL, falling back to [`DEFAULT_API_URL`].
    pub fn api_url(&self) -> String {
        self.cloud_host()
            .and_then(|h| h.api_url.as_deref())
            .map(normalize_api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Gets a configuration value by key.
    ///
    /// Returns `None` for unset values and unknown keys; see [`VALID_KEYS`].
    pub fn get(&self, key: &str) -> Option<String> {
        let host = self.cloud_host()?;
        match key {
            "user" => host.user.clone(),
            "default_workspace" => host.default_workspace.clone(),
            "api_url" => host.api_url.clone(),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// Returns `false` if the key is unknown.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        if !VALID_KEYS.contains(&key) {
            return false;
        }

        let host = self.cloud_host_mut();
        match key {
            "user" => host.user = Some(value),
            "default_workspace" => host.default_workspace = Some(value),
            _ => host.api_url = Some(value),
        }
        true
    }

    /// Removes a configuration value by key.
    ///
    /// Returns `false` if the key is unknown.
    pub fn unset(&mut self, key: &str) -> bool {
        if !VALID_KEYS.contains(&key) {
            return false;
        }

        if let Some(host) = self.hosts.get_mut(BITBUCKET_CLOUD) {
            match key {
                "user" => host.user = None,
                "default_workspace" => host.default_workspace = None,
                _ => host.api_url = None,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.default_workspace().is_none());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_save_and_load_round_trip_default_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        assert!(config.set("default_workspace", "myteam".to_string()));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_workspace(), Some("myteam"));
        assert_eq!(loaded.cloud_host().unwrap().host, BITBUCKET_CLOUD);
    }

    #[test]
    fn test_reads_full_cli_config_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[core]\ngit_protocol = \"ssh\"\n\n[hosts.\"bitbucket.org\"]\nhost = \"bitbucket.org\"\ndefault_workspace = \"acme\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_workspace(), Some("acme"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "hosts = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.set("default_workspace", "from-file".to_string());

        config.apply_env_overrides(|key| match key {
            "BB_DEFAULT_WORKSPACE" => Some("from-env".to_string()),
            "BB_API_URL" => Some("http://localhost:8080/".to_string()),
            _ => None,
        });

        assert_eq!(config.default_workspace(), Some("from-env"));
        assert_eq!(config.api_url(), "http://localhost:8080");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = Config::default();
        config.set("default_workspace", "from-file".to_string());
        config.apply_env_overrides(|_| Some(String::new()));
        assert_eq!(config.default_workspace(), Some("from-file"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let mut config = Config::default();
        assert!(!config.set("editor", "vim".to_string()));
        assert!(!config.unset("editor"));
        assert_eq!(config.get("editor"), None);
    }

    #[test]
    fn test_unset_clears_value() {
        let mut config = Config::default();
        config.set("default_workspace", "myteam".to_string());
        assert!(config.unset("default_workspace"));
        assert!(config.default_workspace().is_none());
    }
}
