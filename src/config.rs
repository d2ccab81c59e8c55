//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cfgtree/cfgtree.toml`
//! 3. Local config: `<dir>/.cfgtree.toml` (usually the working directory)
//! 4. Environment variables: `CFGTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::util::path::expand_path;

/// Unified configuration for cfgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Document used when a command omits FILE
    pub document: Option<PathBuf>,
    /// Export only the top level in `dump` unless `--deep` is given
    pub shallow: bool,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            document: None,
            shallow: false,
            color: true,
        }
    }
}

/// Get the XDG config directory for cfgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cfgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cfgtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".cfgtree.toml")
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(document) = &self.document {
            self.document = Some(expand_path(document));
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.cfgtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), local_dir)
    }

    /// Load settings from an explicit global config file.
    ///
    /// Missing files are skipped; a present but malformed file is an error.
    pub fn load_from(global: Option<&Path>, local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("shallow", defaults.shallow)
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?;

        if let Some(global_path) = global.filter(|p| p.exists()) {
            debug!("settings: global {}", global_path.display());
            builder = builder.add_source(File::from(global_path).required(false));
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("settings: local {}", local_path.display());
                builder = builder.add_source(File::from(local_path).required(true));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("CFGTREE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths();

        Ok(settings)
    }

    /// Resolve the document for a command: explicit argument first, then settings.
    pub fn document_or(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(expand_path)
            .or_else(|| self.document.clone())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cfgtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/cfgtree/cfgtree.toml
#   Local:  ./.cfgtree.toml
#   Env:    CFGTREE_* environment variables (e.g. CFGTREE_DOCUMENT)

# Document used when a command omits FILE
# document = "~/server/config.toml"

# Export only the top level in `dump` (nested sections shown empty)
# shallow = false

# Colored terminal output
# color = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
