//! Settings files.
//!
//! A settings file is TOML with a `[clock]` table holding
//! [`ClockSettings`] keys. Top-level keys starting with `@` import other
//! files, resolved relative to the importing file:
//!
//! ```toml
//! "@presets/station" = {}
//!
//! [clock]
//! title = "Platform 3"
//! seconds_visible = true
//! ```
//!
//! Imports merge in the order they are written, so a later import wins
//! over an earlier one; the importing file wins over all of them.

mod loading;

use std::{env, io, path::PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    builder::{ClockBuilder, ClockSettings},
    core::Result,
};

/// Contents of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClockFile {
    /// Clock options.
    #[serde(default)]
    pub clock: ClockSettings,
}

impl ClockFile {
    /// Turns the file into a builder ready for further overrides.
    ///
    /// # Errors
    /// Returns `InvalidSetting` when a value passed parsing but is unusable.
    pub fn into_builder(self) -> Result<ClockBuilder> {
        ClockBuilder::from_settings(self.clock)
    }

    /// JSON schema describing settings files, for editor completion.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(ClockFile)
    }
}

const APP_DIR: &str = "clockface";
const MAIN_FILE: &str = "clock.toml";

/// Where the user's settings live.
pub struct ConfigPaths;

impl ConfigPaths {
    /// `$XDG_CONFIG_HOME/clockface`, or `$HOME/.config/clockface` when
    /// `XDG_CONFIG_HOME` is unset or empty.
    ///
    /// # Errors
    /// `NotFound` when `HOME` is needed but unset.
    pub fn config_dir() -> io::Result<PathBuf> {
        if let Some(dir) = env::var_os("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir).join(APP_DIR));
        }

        let home = env::var_os("HOME").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "cannot locate settings: HOME is not set",
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join(APP_DIR))
    }

    /// The settings file used when none is given explicitly.
    ///
    /// # Errors
    /// See [`ConfigPaths::config_dir`].
    pub fn main_config() -> io::Result<PathBuf> {
        Ok(Self::config_dir()?.join(MAIN_FILE))
    }
}

#[cfg(test)]
mod tests;
