//! # Client configuration: `Pokedex.toml`
//!
//! Fixed addresses and tunables for the web client. The file is embedded into
//! the binary at build time, so every value here is decided before the app
//! starts and never computed per request.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! base_url = "http://127.0.0.1:5000"   # personal collection REST backend
//!
//! [catalog]
//! base_url = "https://pokeapi.co/api/v2"
//! page_size = 12
//!
//! [storage]
//! session_key = "user"                  # localStorage key for the session
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`PokedexConfig::default`].

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid Pokedex.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `Pokedex.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PokedexConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Personal collection backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

/// Public read-only catalog API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_url")]
    pub base_url: String,
    /// Entries per page on the dashboard grid.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_catalog_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_page_size() -> u32 {
    12
}

fn default_session_key() -> String {
    "user".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            page_size: default_page_size(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
        }
    }
}

impl PokedexConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "Pokedex.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        Ok(config.normalized())
    }

    // Base URLs are joined with paths that start with '/'.
    fn normalized(mut self) -> Self {
        let trim = |s: &mut String| {
            while s.ends_with('/') {
                s.pop();
            }
        };
        trim(&mut self.backend.base_url);
        trim(&mut self.catalog.base_url);
        if self.catalog.page_size == 0 {
            self.catalog.page_size = default_page_size();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = PokedexConfig::from_toml("").unwrap();
        assert_eq!(config, PokedexConfig::default());
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.storage.session_key, "user");
    }

    #[test]
    fn test_partial_sections() {
        let config = PokedexConfig::from_toml(
            r#"
            [backend]
            base_url = "https://dex.example.com/api/"

            [catalog]
            page_size = 24
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://dex.example.com/api");
        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog.page_size, 24);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let config = PokedexConfig::from_toml("[catalog]\npage_size = 0\n").unwrap();
        assert_eq!(config.catalog.page_size, 12);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            PokedexConfig::from_toml("[backend"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = PokedexConfig::from_toml(
            "[backend]\nbase_url = \"http://localhost:8000//\"\n[catalog]\nbase_url = \"https://pokeapi.co/api/v2/\"\n",
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
    }
}
