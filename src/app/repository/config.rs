//! Repository configuration
//!
//! The configuration names the repository root and, per geographic code, the
//! source formats that must not be used for it (e.g. a publisher whose
//! exports in one format are known bad). It is loaded once and then passed
//! around by value; callers that mutate the forbidden-formats table between
//! calls need `&mut` access, which also rules out concurrent mutation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::geography::GeographicCode;
use crate::constants::layout::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ConfigError, ConfigResult};

/// Repository root and per-geography forbidden formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    root_dir: PathBuf,
    forbidden_formats: BTreeMap<GeographicCode, BTreeSet<String>>,
}

/// TOML-friendly configuration mirror
///
/// Geographic codes are plain string keys here so that a typo surfaces as a
/// named [`ConfigError::UnknownGeographicCode`] instead of a serde message.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RepositoryConfigToml {
    /// Repository root directory
    root_dir: PathBuf,
    /// Format identifiers that must not be used per geographic code
    #[serde(default)]
    forbidden_formats: BTreeMap<String, Vec<String>>,
}

impl RepositoryConfig {
    /// Create a configuration with an empty forbidden-formats table
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            forbidden_formats: BTreeMap::new(),
        }
    }

    /// Load the configuration from the platform configuration directory
    pub fn load() -> ConfigResult<Self> {
        Self::from_path(&Self::default_config_path())
    }

    /// Load the configuration from a TOML file
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        debug!("loading repository configuration from {}", path.display());
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Parse the configuration from a TOML document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let raw: RepositoryConfigToml = toml::from_str(content)?;
        let mut forbidden_formats = BTreeMap::new();
        for (token, formats) in raw.forbidden_formats {
            let code = GeographicCode::from_token(&token)
                .ok_or(ConfigError::UnknownGeographicCode { token })?;
            forbidden_formats
                .entry(code)
                .or_insert_with(BTreeSet::new)
                .extend(formats);
        }
        Ok(Self {
            root_dir: raw.root_dir,
            forbidden_formats,
        })
    }

    /// The repository root directory
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Whether `format_id` must not be used for `code`
    pub fn is_forbidden(&self, code: GeographicCode, format_id: &str) -> bool {
        self.forbidden_formats
            .get(&code)
            .is_some_and(|formats| formats.contains(format_id))
    }

    /// Forbid `format_id` for `code`
    pub fn forbid(&mut self, code: GeographicCode, format_id: impl Into<String>) {
        self.forbidden_formats
            .entry(code)
            .or_default()
            .insert(format_id.into());
    }

    /// The forbidden-formats table
    pub fn forbidden_formats(&self) -> &BTreeMap<GeographicCode, BTreeSet<String>> {
        &self.forbidden_formats
    }

    /// Default configuration path under the platform config root
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(format!("./{CONFIG_DIR_NAME}")))
            .join(CONFIG_FILE_NAME)
    }
}
