//! Configuration for folio.
//!
//! Values are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file: the one given explicitly, otherwise `folio.toml` in the
//!    working directory, otherwise `folio.toml` in the user's config directory
//! 3. Environment variables prefixed with `FOLIO_` (e.g. `FOLIO_USER_ID`)
//!
//! ```toml
//! user_id = "modem-56k"
//! base_url = "https://raw.githubusercontent.com/{user_id}/img/main/{year}/{month}/{day}/"
//! output_dir = "data"
//! label_selector = "span.PRIVATE_TreeView-item-content-text"
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

pub const CONFIG_FILE_NAME: &str = "folio.toml";
pub const ENV_PREFIX: &str = "FOLIO_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Written into every manifest as `user_id`
    pub user_id: String,
    /// Written into every manifest as `base_url`
    pub base_url: String,
    /// Directory manifests are written to
    pub output_dir: PathBuf,
    /// CSS selector for file-tree item labels
    pub label_selector: String,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            user_id: folio_manifest::DEFAULT_USER_ID.to_string(),
            base_url: folio_manifest::DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(folio_manifest::DEFAULT_OUTPUT_DIR),
            label_selector: folio_extract::DEFAULT_LABEL_SELECTOR.to_string(),
        }
    }
}
impl Config {
    /// Loads the layered configuration.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::NotFound`] if `explicit` is given but doesn't exist.
    /// - [`ErrorKind::Invalid`] if any source holds values of the wrong type.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(),
        };
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            tracing::debug!(path = %file.display(), "loading configuration file");
            figment = figment.merge(Toml::file(file));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract::<Self>().map_err(|e| ErrorKind::Invalid(e.to_string()))?)
    }

    /// Finds the first configuration file that exists in the default locations.
    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        let user = ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
        [Some(local), user].into_iter().flatten().find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults() {
        let config = Config::from_figment(Figment::from(Serialized::defaults(Config::default()))).unwrap();
        assert_eq!(config.user_id, "modem-56k");
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.label_selector, "span.PRIVATE_TreeView-item-content-text");
        assert!(config.base_url.contains("{user_id}"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("user_id = \"someone\"\noutput_dir = \"site/data\""));
        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.user_id, "someone");
        assert_eq!(config.output_dir, PathBuf::from("site/data"));
        assert_eq!(config.base_url, folio_manifest::DEFAULT_BASE_URL);
    }

    #[test]
    fn wrong_type() {
        let figment =
            Figment::from(Serialized::defaults(Config::default())).merge(Toml::string("user_id = [\"a\", \"b\"]"));
        let err = Config::from_figment(figment).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Invalid(_)));
    }

    #[test]
    fn explicit_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "base_url = \"https://cdn.example.com/{year}/{month}/{day}/\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "https://cdn.example.com/{year}/{month}/{day}/");
    }

    #[test]
    fn explicit_file_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nope.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(*err, ErrorKind::NotFound(path));
    }
}
