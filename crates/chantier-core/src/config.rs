use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChantierError, Result};
use crate::i18n::Catalog;

const CONFIG_FILE: &str = "config.toml";
const BASE_DIR_ENV: &str = "CHANTIER_BASE";
const DEFAULT_LANGUAGE: &str = "fr";
const DEFAULT_CATALOG_DIR: &str = "locales";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# chantier configuration file
# Location: ~/.chantier/config.toml

[locale]
# Display language (catalog file stem, e.g. "en" for locales/en.json)
# Default: "fr"
language = "fr"

# Locales tried when the display language has no entry for a key
# Default: []
# Example: fallback = ["en"]
fallback = []

[catalog]
# Directory holding one <locale>.json file per language
# Relative paths are resolved against the base directory
# Default: "locales"
dir = "locales"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Display language settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub fallback: Vec<String>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            fallback: Vec::new(),
        }
    }
}

/// Translation catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_DIR)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
        }
    }
}

impl Config {
    /// Resolve the base directory: explicit path, `CHANTIER_BASE`, then `~/.chantier`
    pub fn base_dir(explicit: Option<PathBuf>) -> PathBuf {
        if let Some(base) = explicit {
            return base;
        }

        if let Ok(base) = std::env::var(BASE_DIR_ENV) {
            return PathBuf::from(base);
        }

        dirs::home_dir()
            .map(|h| h.join(".chantier"))
            .unwrap_or_else(|| PathBuf::from(".chantier"))
    }

    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| ChantierError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| ChantierError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir.join(DEFAULT_CATALOG_DIR))?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "locale.language" => Some(self.locale.language.clone()),
            "locale.fallback" => Some(format!("{:?}", self.locale.fallback)),
            "catalog.dir" => Some(self.catalog.dir.display().to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale.language" => {
                let language = value.trim();
                if language.is_empty() {
                    return Err(ChantierError::InvalidConfigValue {
                        key: key.to_string(),
                        message: "language must not be empty".to_string(),
                    });
                }
                self.locale.language = language.to_string();
                Ok(())
            }
            "locale.fallback" => {
                self.locale.fallback = parse_string_list(value);
                Ok(())
            }
            "catalog.dir" => {
                self.catalog.dir = PathBuf::from(value.trim());
                Ok(())
            }
            _ => Err(ChantierError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["locale.language", "locale.fallback", "catalog.dir"]
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Catalog directory, resolved against `base_dir` when relative
    pub fn catalog_dir(&self, base_dir: &Path) -> PathBuf {
        if self.catalog.dir.is_absolute() {
            self.catalog.dir.clone()
        } else {
            base_dir.join(&self.catalog.dir)
        }
    }

    /// Load the translation catalog with this config's fallback chain
    ///
    /// A missing catalog directory yields an empty catalog, so every label
    /// falls back to its canonical name.
    pub fn load_catalog(&self, base_dir: &Path) -> Result<Catalog> {
        let dir = self.catalog_dir(base_dir);
        let mut catalog = match Catalog::load_dir(&dir) {
            Ok(catalog) => catalog,
            Err(ChantierError::CatalogDirNotFound { .. }) => Catalog::new(),
            Err(e) => return Err(e),
        };
        catalog.set_fallback_chain(self.locale.fallback.clone());
        Ok(catalog)
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();

    // Try JSON array format first: ["a", "b"]
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_string_list_comma() {
        assert_eq!(parse_string_list("en,fr"), vec!["en", "fr"]);
    }

    #[test]
    fn test_parse_string_list_json() {
        assert_eq!(parse_string_list(r#"["en", "fr"]"#), vec!["en", "fr"]);
    }

    #[test]
    fn test_parse_string_list_empty() {
        assert!(parse_string_list("[]").is_empty());
        assert!(parse_string_list("").is_empty());
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();
        assert_eq!(config.get("locale.language").as_deref(), Some("fr"));

        config.set("locale.language", "en").unwrap();
        config.set("locale.fallback", "fr").unwrap();
        assert_eq!(config.locale.language, "en");
        assert_eq!(config.locale.fallback, vec!["fr"]);
        assert!(config.get("locale.fallback").unwrap().contains("fr"));
    }

    #[test]
    fn test_config_set_invalid() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("locale.language", "  "),
            Err(ChantierError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("unknown.key", "x"),
            Err(ChantierError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn test_list_covers_all_keys() {
        let keys: Vec<String> = Config::default().list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["locale.language", "locale.fallback", "catalog.dir"]);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("locale.language", "en").unwrap();
        config.save(tmp.path()).unwrap();

        let loaded = Config::load(tmp.path()).unwrap();
        assert_eq!(loaded.locale.language, "en");
    }

    #[test]
    fn test_init_template_parses() {
        let tmp = TempDir::new().unwrap();
        let path = Config::init(tmp.path()).unwrap();
        assert!(path.exists());
        assert!(tmp.path().join("locales").is_dir());

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.locale.language, "fr");
        assert!(config.locale.fallback.is_empty());
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[locale\nlanguage = ").unwrap();
        assert!(matches!(
            Config::load(tmp.path()),
            Err(ChantierError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_catalog_dir_resolution() {
        let mut config = Config::default();
        let base = Path::new("/srv/chantier");
        assert_eq!(config.catalog_dir(base), base.join("locales"));

        config.set("catalog.dir", "/opt/locales").unwrap();
        assert_eq!(config.catalog_dir(base), PathBuf::from("/opt/locales"));
    }

    #[test]
    fn test_load_catalog() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default();

        // no directory yet: empty catalog
        let catalog = config.load_catalog(tmp.path()).unwrap();
        assert!(catalog.locales().is_empty());

        fs::create_dir_all(tmp.path().join("locales")).unwrap();
        fs::write(
            tmp.path().join("locales/en.json"),
            r#"{"categories": {"roofing": "Roofing"}}"#,
        )
        .unwrap();
        let catalog = config.load_catalog(tmp.path()).unwrap();
        assert_eq!(catalog.locales(), vec!["en"]);
    }
}
