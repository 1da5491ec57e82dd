// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Cross-platform path manipulation.
//!
//! Determine where asynctask expects its configuration to live.

use crate::{Error, Result};

use std::path::PathBuf;

/// Get absolute path to asynctask's configuration directory.
///
/// # Errors
///
/// - Return [`Error::NoWayConfig`] if path to configuration directory cannot be determined.
///
/// [`Error::NoWayConfig`]: crate::Error::NoWayConfig
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|path| path.join("asynctask")).ok_or(Error::NoWayConfig)
}

/// Get absolute path to asynctask's default configuration file.
///
/// # Errors
///
/// - Return [`Error::NoWayConfig`] if path to configuration directory cannot be determined.
///
/// [`Error::NoWayConfig`]: crate::Error::NoWayConfig
pub fn config_file() -> Result<PathBuf> {
    config_dir().map(|path| path.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use sealed_test::prelude::*;

    #[sealed_test(env = [("XDG_CONFIG_HOME", "/tmp/xdg")])]
    fn smoke_config_file() -> Result<()> {
        let result = config_file()?;
        assert!(result.ends_with("asynctask/config.toml"));
        Ok(())
    }
}
