//! Configuration management for postmore.
//!
//! Parses `postmore.toml` with serde and provides auto-discovery of the
//! config file in parent directories. CLI settings are applied during load
//! via [`CliSettings`].
//!
//! ```toml
//! [excerpt]
//! more_text = "Read more"
//!
//! [site]
//! base_url = "${SITE_URL:-https://blog.example.com}"
//!
//! [template]
//! path = "templates/post.html"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `excerpt.more_text` and `site.base_url` support `${VAR}` and
//! `${VAR:-default}`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override "read more" link text.
    pub more_text: Option<String>,
    /// Override site base URL.
    pub base_url: Option<String>,
    /// Override post template path.
    pub template: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "postmore.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Excerpt link configuration.
    pub excerpt: ExcerptConfig,
    /// Site configuration.
    pub site: SiteConfig,
    /// Template configuration (path relative to the config file).
    template: TemplateConfigRaw,

    /// Resolved post template path (set after loading).
    #[serde(skip)]
    pub template_path: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Excerpt link configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExcerptConfig {
    /// Default "read more" link text.
    pub more_text: String,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            more_text: "Read more".to_owned(),
        }
    }
}

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL prefixed to post paths. Empty keeps post URLs as given.
    pub base_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TemplateConfigRaw {
    path: Option<String>,
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
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `postmore.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = if config_path.is_some() {
            None
        } else {
            std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_from(&cwd))
        };

        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = discovered {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(more_text) = &settings.more_text {
            self.excerpt.more_text.clone_from(more_text);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
        if let Some(template) = &settings.template {
            self.template_path = Some(template.clone());
        }
    }

    /// Full URL of a post.
    ///
    /// `path` is joined onto `site.base_url` with exactly one slash between
    /// them. Absolute `http(s)://` URLs and an empty base URL leave `path`
    /// unchanged.
    #[must_use]
    pub fn post_url(&self, path: &str) -> String {
        if self.site.base_url.is_empty() || is_http_url(path) {
            return path.to_owned();
        }
        format!(
            "{}/{}",
            self.site.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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
        if !self.site.base_url.is_empty() && !is_http_url(&self.site.base_url) {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.excerpt.more_text = expand::expand_env(&self.excerpt.more_text, "excerpt.more_text")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Resolve the template path relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.template_path = self.template.path.as_deref().map(|p| config_dir.join(p));
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.excerpt.more_text, "Read more");
        assert_eq!(config.site.base_url, "");
        assert!(config.template_path.is_none());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.excerpt.more_text, "Read more");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[excerpt]
more_text = "Continue reading"

[site]
base_url = "https://blog.example.com"

[template]
path = "templates/post.html"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/site"));

        assert_eq!(config.excerpt.more_text, "Continue reading");
        assert_eq!(config.site.base_url, "https://blog.example.com");
        assert_eq!(
            config.template_path,
            Some(PathBuf::from("/site/templates/post.html"))
        );
    }

    #[test]
    fn test_parse_unknown_field_type() {
        let result: Result<Config, _> = toml::from_str("[excerpt]\nmore_text = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_allows_empty_more_text() {
        let mut config = Config::default();
        config.excerpt.more_text = String::new();
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default();
        config.site.base_url = "blog.example.com".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.base_url"));

        config.site.base_url = "http://blog.example.com".to_owned();
        config.validate().unwrap();
    }

    #[test]
    fn test_post_url_without_base() {
        let config = Config::default();
        assert_eq!(config.post_url("/posts/hello"), "/posts/hello");
    }

    #[test]
    fn test_post_url_joins_single_slash() {
        let mut config = Config::default();
        config.site.base_url = "https://blog.example.com/".to_owned();
        assert_eq!(
            config.post_url("/posts/hello"),
            "https://blog.example.com/posts/hello"
        );
        assert_eq!(
            config.post_url("posts/hello"),
            "https://blog.example.com/posts/hello"
        );
    }

    #[test]
    fn test_post_url_absolute_unchanged() {
        let mut config = Config::default();
        config.site.base_url = "https://blog.example.com".to_owned();
        assert_eq!(
            config.post_url("https://other.example.com/p/1"),
            "https://other.example.com/p/1"
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            more_text: Some("More".to_owned()),
            template: Some(PathBuf::from("/custom/post.html")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.excerpt.more_text, "More");
        assert_eq!(config.site.base_url, ""); // Unchanged
        assert_eq!(
            config.template_path,
            Some(PathBuf::from("/custom/post.html"))
        );
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postmore.toml");
        std::fs::write(
            &path,
            "[excerpt]\nmore_text = \"Keep reading\"\n\n[template]\npath = \"post.html\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.excerpt.more_text, "Keep reading");
        assert_eq!(config.template_path, Some(dir.path().join("post.html")));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postmore.toml");
        std::fs::write(&path, "[site]\nbase_url = \"ftp://example.com\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_cli_settings_empty_more_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postmore.toml");
        std::fs::write(&path, "").unwrap();

        let overrides = CliSettings {
            more_text: Some(String::new()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();
        assert_eq!(config.excerpt.more_text, "");
    }

    #[test]
    fn test_load_cli_settings_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postmore.toml");
        std::fs::write(&path, "[site]\nbase_url = \"https://file.example.com\"\n").unwrap();

        let overrides = CliSettings {
            base_url: Some("https://cli.example.com/".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();
        assert_eq!(
            config.post_url("/posts/hello"),
            "https://cli.example.com/posts/hello"
        );
    }

    #[test]
    fn test_load_cli_settings_invalid_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postmore.toml");
        std::fs::write(&path, "").unwrap();

        let overrides = CliSettings {
            base_url: Some("blog.example.com".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_expands_env() {
        // SAFETY: test-unique variable name
        unsafe {
            std::env::set_var("POSTMORE_TEST_BASE_URL", "https://env.example.com");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postmore.toml");
        std::fs::write(&path, "[site]\nbase_url = \"${POSTMORE_TEST_BASE_URL}\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.site.base_url, "https://env.example.com");
        unsafe {
            std::env::remove_var("POSTMORE_TEST_BASE_URL");
        }
    }

    #[test]
    fn test_discover_from_parent() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, "").unwrap();
        let nested = dir.path().join("posts/2024");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_from(&nested), Some(config_path));
    }
}
