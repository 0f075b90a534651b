//! Application configuration loaded from the sets root.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::OverwritePolicy;

/// Name of the optional configuration file inside the sets root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from `<sets_root>/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefabConfig {
    /// Rendering defaults.
    #[serde(default)]
    pub render: RenderSettings,
}

/// Defaults applied when the command line leaves them unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderSettings {
    /// Replace existing files without requiring `--force`.
    #[serde(default)]
    pub overwrite: bool,
}

impl PrefabConfig {
    /// Load the configuration file from `sets_root`, falling back to
    /// defaults when the file does not exist.
    pub fn load(sets_root: &Path) -> Result<Self, AppError> {
        let path = sets_root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overwrite policy implied by this configuration.
    pub fn overwrite_policy(&self) -> OverwritePolicy {
        if self.render.overwrite { OverwritePolicy::Always } else { OverwritePolicy::IfMissing }
    }
}
