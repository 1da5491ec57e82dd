// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Runtime settings.
//!
//! Settings control how an [`AsyncTask`] drives its jobs. They are layered from the built-in
//! defaults, an optional TOML file, and `ASYNCTASK_` prefixed environment variables, with later
//! layers taking priority.
//!
//! ```toml
//! # $XDG_CONFIG_HOME/asynctask/config.toml
//! jobs = 4
//! timeout = 30
//! ```
//!
//! [`AsyncTask`]: crate::AsyncTask

use crate::{path::config_file, Error, Result};

use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::{debug, instrument, trace};

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "ASYNCTASK";

/// Settings of an [`AsyncTask`].
///
/// # Invariants
///
/// - Job limit is never zero when set.
/// - Timeout is never zero when set.
///
/// [`AsyncTask`]: crate::AsyncTask
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of jobs executing at once, with [`None`] meaning no limit.
    pub jobs: Option<usize>,

    /// Timeout in seconds applied to each job individually.
    pub timeout: Option<u64>,
}

impl Settings {
    /// Load settings from default configuration file and environment.
    ///
    /// Will not fail if the configuration file is missing, because it is deemed optional.
    ///
    /// # Errors
    ///
    /// - Return [`Error::NoWayConfig`] if configuration directory cannot be determined.
    /// - Return [`Error::Config`] if configuration file contains invalid TOML, or values of the
    ///   wrong type.
    /// - Return [`Error::InvalidSettings`] if loaded values break invariants.
    #[instrument(level = "debug")]
    pub fn load() -> Result<Self> {
        let path = config_file()?;
        Self::layered(&path, false)
    }

    /// Load settings from a specific configuration file and environment.
    ///
    /// Unlike [`Settings::load`], the given file must exist.
    ///
    /// # Errors
    ///
    /// - Return [`Error::Config`] if configuration file is missing, contains invalid TOML, or
    ///   values of the wrong type.
    /// - Return [`Error::InvalidSettings`] if loaded values break invariants.
    #[instrument(skip(path), level = "debug")]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::layered(path.as_ref(), true)
    }

    fn layered(path: &Path, required: bool) -> Result<Self> {
        trace!("Load settings");
        debug!("Load settings at {path:?}");

        let settings: Settings = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        settings.validate()?;

        debug!("Loaded {settings:?}");
        Ok(settings)
    }

    /// Check that settings uphold their invariants.
    ///
    /// # Errors
    ///
    /// - Return [`Error::InvalidSettings`] for zero job limit or zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == Some(0) {
            return Err(Error::InvalidSettings {
                field: "jobs",
                reason: "job limit must be at least 1".into(),
            });
        }

        if self.timeout == Some(0) {
            return Err(Error::InvalidSettings {
                field: "timeout",
                reason: "timeout must be at least 1 second".into(),
            });
        }

        Ok(())
    }

    /// Per-job timeout as a [`Duration`].
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
