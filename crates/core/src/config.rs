//! Site configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name looked up in the working directory when no path is given.
pub const LOCAL_CONFIG_FILE: &str = "abysslab.toml";

/// Settings shared by every command, built once at start-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the YAML dataset.
    pub data_dir: PathBuf,
    /// Directory receiving the generated site.
    pub out_dir: PathBuf,
    /// Locales to generate; empty means a single unlocalised build.
    pub locales: Vec<String>,
    /// Locale written at the site root instead of under `/<locale>`.
    pub default_locale: Option<String>,
    /// Base URL for images and other hosted assets.
    pub assets_base_url: String,
    /// Title appended to every page title.
    pub site_title: String,
    /// Pins the version shown as "current"; the newest linked version otherwise.
    pub current_version: Option<String>,
    /// Write each page's assembled props as `props.json` next to its HTML.
    pub emit_props: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/v2-pre"),
            out_dir: PathBuf::from("public"),
            locales: Vec::new(),
            default_locale: None,
            assets_base_url: "https://assets.abyss-lab.app".to_string(),
            site_title: "Abyss Lab".to_string(),
            current_version: None,
            emit_props: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from the local or user config file plus `ABYSSLAB_*` variables.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` when given instead of the default locations.
    ///
    /// An explicit path must exist; the default locations are optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                debug!("loading config from {}", path.display());
                builder = builder.add_source(
                    File::from(path.to_path_buf())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(user_path) = default_config_path() {
                    builder = builder
                        .add_source(File::from(user_path).format(FileFormat::Toml).required(false));
                }
                builder = builder.add_source(
                    File::from(PathBuf::from(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("ABYSSLAB")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("locales"),
            )
            .build()
            .context("failed to assemble configuration")?;

        settings
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    /// Locale variants to build, `None` standing for the unlocalised dataset.
    pub fn build_locales(&self) -> Vec<Option<String>> {
        if self.locales.is_empty() {
            vec![None]
        } else {
            self.locales.iter().cloned().map(Some).collect()
        }
    }

    /// URL path prefix for pages of the given locale.
    pub fn locale_prefix(&self, locale: Option<&str>) -> String {
        match locale {
            Some(locale) if self.default_locale.as_deref() != Some(locale) => {
                format!("/{locale}")
            }
            _ => String::new(),
        }
    }
}

/// Location of the per-user configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("abysslab").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_file_overrides_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            r#"
data_dir = "fixtures/data"
locales = ["en-US", "ko-KR"]
default_locale = "en-US"
emit_props = true
"#,
        )?;

        let config = SiteConfig::load_from(Some(&path))?;
        assert_eq!(config.data_dir, PathBuf::from("fixtures/data"));
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert_eq!(config.locales, vec!["en-US", "ko-KR"]);
        assert!(config.emit_props);
        assert_eq!(config.site_title, "Abyss Lab");
        Ok(())
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = SiteConfig::load_from(Some(Path::new("/nonexistent/abysslab.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn default_locale_has_no_prefix() {
        let config = SiteConfig {
            locales: vec!["en-US".to_string(), "ko-KR".to_string()],
            default_locale: Some("en-US".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.build_locales(),
            vec![Some("en-US".to_string()), Some("ko-KR".to_string())]
        );
        assert_eq!(config.locale_prefix(Some("en-US")), "");
        assert_eq!(config.locale_prefix(Some("ko-KR")), "/ko-KR");
        assert_eq!(config.locale_prefix(None), "");
    }
}
