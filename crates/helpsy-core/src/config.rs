//! Plugin options.
//!
//! The options surface is intentionally small: a `base_path` under which all
//! generated routes are nested, and an optional extra template-resolution
//! root. Missing options are never an error; defaults substitute locally.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

/// Options for the Helpsy pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Options {
    /// URL prefix applied to the index route, category routes, and category
    /// URLs (e.g., "/help/").
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Optional component-resolution root that shadows the theme's own
    /// source tree.
    #[serde(default)]
    pub templates: Option<PathBuf>,
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            templates: None,
        }
    }
}

impl Options {
    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Options file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let options: Options = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse options file: {}", path.display()),
                e,
            )
        })?;

        options.validate();
        Ok(options)
    }

    /// Load options, substituting defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no options file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load options using the config crate for environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("HELPSY").separator("__"))
            .build()?;

        let options: Options = settings.try_deserialize()?;
        options.validate();
        Ok(options)
    }

    /// Warn about base paths that will produce surprising routes.
    ///
    /// Route building is pure concatenation, so a base path is expected to
    /// carry both a leading and a trailing slash. Neither is enforced.
    fn validate(&self) {
        if !self.base_path.starts_with('/') {
            warn!(base_path = %self.base_path, "base_path should start with a slash");
        }
        if !self.base_path.ends_with('/') {
            warn!(base_path = %self.base_path, "base_path should end with a slash");
        }
    }

    /// The route of the index page.
    pub fn index_route(&self) -> &str {
        &self.base_path
    }

    /// The route of a category page, shared by the category URL resolver
    /// and the page driver.
    pub fn category_route(&self, slug: &str) -> String {
        format!("{}categories/{}", self.base_path, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.base_path, "/");
        assert!(options.templates.is_none());
    }

    #[test]
    fn test_load_options() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("helpsy.toml");
        std::fs::write(&path, "base_path = \"/help/\"\ntemplates = \"site\"\n").expect("write");

        let options = Options::load(&path).expect("load options");

        assert_eq!(options.base_path, "/help/");
        assert_eq!(options.templates, Some(PathBuf::from("site")));
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("helpsy.toml");
        std::fs::write(&path, "").expect("write");

        let options = Options::load(&path).expect("load options");
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.toml");

        let options = Options::load_or_default(&path).expect("load options");
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Options::load(Path::new("/nonexistent/helpsy.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_category_route_default_base_path() {
        let options = Options::default();
        assert_eq!(options.index_route(), "/");
        assert_eq!(options.category_route("billing"), "/categories/billing");
    }

    #[test]
    fn test_category_route_custom_base_path() {
        let options = Options {
            base_path: "/help/".to_string(),
            ..Options::default()
        };
        assert_eq!(options.index_route(), "/help/");
        assert_eq!(options.category_route("billing"), "/help/categories/billing");
    }
}
