//! # Configuration
//!
//! Storefront configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Explicit overrides** from the caller (the CLI's `--data-dir`).
//! 2. **Environment variables**: `STOREFRONT_DATA_DIR`, `STOREFRONT_MESSAGE_KEY`,
//!    `STOREFRONT_PRODUCTS_KEY`.
//! 3. **Config file**: `storefront.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! A missing config file is not an error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where the key-value files live |
//! | `message_key` | `favoriteMessage` | Key of the persisted message |
//! | `products_key` | `products` | Key of the persisted product list |

use crate::error::{Result, StorefrontError};
use crate::store::{StorageKeys, MESSAGE_KEY, PRODUCTS_KEY};
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "storefront.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the persisted entries. Defaults to the OS data directory.
    #[config(env = "STOREFRONT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key under which the message is stored.
    #[config(env = "STOREFRONT_MESSAGE_KEY", default = "favoriteMessage")]
    pub message_key: String,

    /// Key under which the product list is stored.
    #[config(env = "STOREFRONT_PRODUCTS_KEY", default = "products")]
    pub products_key: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            message_key: MESSAGE_KEY.to_string(),
            products_key: PRODUCTS_KEY.to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "serene", "storefront")
}

/// `storefront.toml` inside the OS config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl StorefrontConfig {
    /// Loads environment and the default config file.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    /// Loads environment and, if given, the TOML file at `path`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            message: self.message_key.clone(),
            products: self.products_key.clone(),
        }
    }

    /// The configured data directory, or the OS default.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                StorefrontError::Config("Could not determine a data directory".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.message_key, "favoriteMessage");
        assert_eq!(config.products_key, "products");
        assert_eq!(config.storage_keys(), StorageKeys::default());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = StorefrontConfig {
            data_dir: Some(PathBuf::from("/tmp/shop")),
            ..Default::default()
        };
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("/tmp/shop"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "products_key = \"cards\"\n").unwrap();

        let config = StorefrontConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.products_key, "cards");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "products_key = [").unwrap();

        let err = StorefrontConfig::load_from(Some(&path)).unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }
}
