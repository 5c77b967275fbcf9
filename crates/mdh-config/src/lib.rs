//! Configuration management for the MD Homecare content engine.
//!
//! Parses `mdh.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.name`
//! - `data.dir`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override data directory.
    pub data_dir: Option<PathBuf>,
    /// Override related-suburb limit.
    pub related_limit: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdh.toml";

/// Data directory used when no `[data] dir` is configured.
const DEFAULT_DATA_DIR: &str = "public/data";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteSettings,
    /// Data configuration (paths are relative strings from TOML).
    data: DataConfigRaw,
    /// Related-suburb listing settings.
    pub related: RelatedConfig,
    /// Question-tree settings.
    pub questions: QuestionsConfig,

    /// Resolved data configuration (set after loading).
    #[serde(skip)]
    pub data_resolved: DataConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Site name, used as the page title suffix.
    pub name: String,
    /// Value substituted for placeholders when no location is known.
    pub default_location: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "MD Homecare".to_owned(),
            default_location: "Australia".to_owned(),
        }
    }
}

/// Raw data configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DataConfigRaw {
    dir: Option<String>,
}

/// Resolved data configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DataConfig {
    /// Directory holding the JSON fixtures.
    pub dir: PathBuf,
}

/// Ordering applied to related suburbs before truncation.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RelatedOrderSetting {
    /// Keep the suburb table's order.
    #[default]
    Insertion,
    /// Sort by display name.
    Alphabetical,
}

/// Related-suburb listing settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    /// Maximum number of related suburbs to show.
    pub limit: usize,
    /// Ordering before truncation.
    pub order: RelatedOrderSetting,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            order: RelatedOrderSetting::default(),
        }
    }
}

/// Question-tree settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    /// Legacy question ids mapped to their canonical ids.
    pub aliases: BTreeMap<String, String>,
    /// Treat question-graph issues as errors in `mdh check`.
    pub strict: bool,
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            aliases: BTreeMap::from([("q2".to_owned(), "residence".to_owned())]),
            strict: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`data.dir`").
        field: String,
        /// Error message (e.g., "${`MDH_DATA`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdh.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the CLI overrides produce an invalid configuration.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(data_dir) = &settings.data_dir {
            self.data_resolved.dir.clone_from(data_dir);
        }
        if let Some(limit) = settings.related_limit {
            self.related.limit = limit;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSettings::default(),
            data: DataConfigRaw::default(),
            related: RelatedConfig::default(),
            questions: QuestionsConfig::default(),
            data_resolved: DataConfig {
                dir: base.join(DEFAULT_DATA_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;
        require_non_empty(&self.site.default_location, "site.default_location")?;

        if self.related.limit == 0 {
            return Err(ConfigError::Validation(
                "related.limit must be greater than 0".to_owned(),
            ));
        }

        for (alias, target) in &self.questions.aliases {
            require_non_empty(alias, "questions.aliases key")?;
            require_non_empty(target, &format!("questions.aliases.{alias}"))?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.name = expand::expand_env(&self.site.name, "site.name")?;

        if let Some(ref dir) = self.data.dir {
            self.data.dir = Some(expand::expand_env(dir, "data.dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let dir = self.data.dir.as_deref().unwrap_or(DEFAULT_DATA_DIR);
        self.data_resolved = DataConfig {
            dir: config_dir.join(dir),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(config.site.name, "MD Homecare");
        assert_eq!(config.site.default_location, "Australia");
        assert_eq!(config.data_resolved.dir, PathBuf::from("/site/public/data"));
        assert_eq!(config.related.limit, 3);
        assert_eq!(config.related.order, RelatedOrderSetting::Insertion);
        assert_eq!(
            config.questions.aliases.get("q2").map(String::as_str),
            Some("residence")
        );
        assert!(!config.questions.strict);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.name, "MD Homecare");
        assert_eq!(config.related.limit, 3);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
name = "Harbour Care"
default_location = "NSW"

[data]
dir = "static/data"

[related]
limit = 5
order = "alphabetical"

[questions]
strict = true

[questions.aliases]
q3 = "income"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.name, "Harbour Care");
        assert_eq!(config.site.default_location, "NSW");
        assert_eq!(config.data.dir.as_deref(), Some("static/data"));
        assert_eq!(config.related.limit, 5);
        assert_eq!(config.related.order, RelatedOrderSetting::Alphabetical);
        assert!(config.questions.strict);
        assert_eq!(
            config.questions.aliases,
            BTreeMap::from([("q3".to_owned(), "income".to_owned())])
        );
    }

    #[test]
    fn test_parse_unknown_order_fails() {
        let toml = r#"
[related]
order = "nearest"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[data]
dir = "fixtures"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.data_resolved.dir, PathBuf::from("/project/fixtures"));
    }

    #[test]
    fn test_resolve_paths_default_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.data_resolved.dir,
            PathBuf::from("/project/public/data")
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            data_dir: Some(PathBuf::from("/elsewhere")),
            related_limit: Some(8),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.data_resolved.dir, PathBuf::from("/elsewhere"));
        assert_eq!(config.related.limit, 8);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/site"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.data_resolved.dir, PathBuf::from("/site/public/data"));
        assert_eq!(config.related.limit, 3);
    }

    #[test]
    fn test_expand_env_vars_data_dir() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MDH_TEST_DATA_ROOT", "/srv/www");
        }

        let toml = r#"
[data]
dir = "${MDH_TEST_DATA_ROOT}/data"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.data.dir.as_deref(), Some("/srv/www/data"));

        unsafe {
            std::env::remove_var("MDH_TEST_DATA_ROOT");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MDH_TEST_MISSING_NAME");
        }

        let toml = r#"
[site]
name = "${MDH_TEST_MISSING_NAME}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("site.name"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/site"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_site_name() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.name = "  ".to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.name"));
    }

    #[test]
    fn test_validate_zero_related_limit() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.related.limit = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("related.limit"));
    }

    #[test]
    fn test_validate_empty_alias_target() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config
            .questions
            .aliases
            .insert("q9".to_owned(), String::new());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("questions.aliases.q9"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/mdh.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mdh.toml");
        std::fs::write(&path, "[data]\ndir = \"content\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.data_resolved.dir, dir.path().join("content"));
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_rejects_zero_limit_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mdh.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            related_limit: Some(0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
