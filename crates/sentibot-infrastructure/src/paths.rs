//! Path management for sentibot configuration files.
//!
//! ```text
//! <config_dir>/sentibot/       # e.g. ~/.config/sentibot on Linux
//! └── config.toml              # Classifier configuration
//! ```

use sentibot_core::{Result, SentibotError};
use std::path::PathBuf;

const APP_DIR: &str = "sentibot";
const CONFIG_FILE: &str = "config.toml";

pub struct SentibotPaths;

impl SentibotPaths {
    /// Returns the sentibot configuration directory.
    ///
    /// # Errors
    ///
    /// Returns a config error if the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SentibotError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
