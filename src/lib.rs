// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Internal library for the asynctask tool.
//!
//! The centerpiece is [`AsyncTask`], a unit that can be constructed with no arguments and
//! executed with a single blocking call to [`Runnable::run`]. Underneath that call, an
//! `AsyncTask` drives a set of named [`Job`]s concurrently on a [tokio] runtime, waits for every
//! one of them to finish, and reports whether all of them completed.
//!
//! ## Jobs and Reports
//!
//! A __job__ is a named piece of asynchronous work. Jobs are built from a factory that produces a
//! fresh future for every execution, which allows the same `AsyncTask` to be run any number of
//! times. Shell commands can be turned into jobs directly through [`Job::command`].
//!
//! Every execution produces a [`Report`] that records the [`JobOutcome`] of each job in the order
//! the jobs were attached. A failing job never cancels its siblings. An `AsyncTask` without jobs
//! always reports success.
//!
//! ## Settings
//!
//! The number of jobs allowed to execute at once, and an optional per-job timeout, are described
//! by [`Settings`]. Settings can be loaded from `$XDG_CONFIG_HOME/asynctask/config.toml` and from
//! `ASYNCTASK_` prefixed environment variables.
//!
//! [tokio]: https://docs.rs/tokio

#![warn(
    clippy::complexity,
    clippy::correctness,
    missing_debug_implementations,
    rust_2021_compatibility
)]

pub mod cmd;
pub mod config;
pub mod path;
pub mod task;
pub mod utils;

pub use config::Settings;
pub use task::{AsyncTask, Job, JobOutcome, Report, Runnable};

/// All possible error variants of the asynctask library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration sources could not be read or deserialized.
    #[error(transparent)]
    Config(#[from] ::config::ConfigError),

    /// Configuration directory path could not be determined.
    #[error("Cannot determine path to configuration directory")]
    NoWayConfig,

    /// Settings were read, but hold values that cannot be used.
    #[error("Invalid setting {field:?}: {reason}")]
    InvalidSettings { field: &'static str, reason: String },

    /// Runtime construction or other I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Helper thread driving the runtime panicked.
    #[error("Runtime thread panicked: {message}")]
    RuntimePanic { message: String },

    /// One or more jobs did not complete.
    #[error("{count} job(s) did not complete")]
    JobsFailed {
        count: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// Friendly result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Map library error to process exit status.
///
/// Follows the conventions of `sysexits.h` through the [`exitcode`] crate.
pub fn exit_status_from_error(error: &Error) -> exitcode::ExitCode {
    match error {
        Error::Config(..) | Error::NoWayConfig | Error::InvalidSettings { .. } => {
            exitcode::CONFIG
        }
        Error::Io(..) => exitcode::IOERR,
        Error::RuntimePanic { .. } | Error::JobsFailed { .. } => exitcode::SOFTWARE,
    }
}
