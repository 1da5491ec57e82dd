// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Command-line interface.
//!
//! This module is the forward facing API of internal library. It is meant to be used in `main` of
//! the asynctask binary.

use crate::{
    config::Settings,
    task::{AsyncTask, Job, Report},
    Result,
};

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Run shell commands concurrently as one task.
#[derive(Debug, Clone, Parser)]
#[command(about, override_usage = "asynctask [options] [command]...", version)]
pub struct Cli {
    /// Maximum number of commands running at once.
    #[arg(short, long, value_name = "limit")]
    pub jobs: Option<usize>,

    /// Timeout in seconds applied to each command.
    #[arg(short, long, value_name = "seconds")]
    pub timeout: Option<u64>,

    /// Load settings from this file instead of the default configuration file.
    #[arg(short, long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Shell command lines to run, each as its own job.
    #[arg(value_name = "command")]
    pub commands: Vec<String>,
}

impl Cli {
    /// Resolve settings from configuration sources, with command-line flags taking priority.
    ///
    /// # Errors
    ///
    /// Will fail if settings cannot be loaded, or if final settings are invalid.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };

        if self.jobs.is_some() {
            settings.jobs = self.jobs;
        }

        if self.timeout.is_some() {
            settings.timeout = self.timeout;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Build task holding one job per command line.
    ///
    /// Jobs are named after their position on the command line, i.e., "#1", "#2", and so on.
    ///
    /// # Errors
    ///
    /// Will fail if settings cannot be resolved.
    pub fn task(&self) -> Result<AsyncTask> {
        let mut task = AsyncTask::with_settings(self.settings()?)?;
        for (index, command) in self.commands.iter().enumerate() {
            task.add_job(Job::command(format!("#{}", index + 1), command));
        }

        Ok(task)
    }

    /// Run all command lines given on the command line.
    ///
    /// # Errors
    ///
    /// - Will fail if settings cannot be resolved.
    /// - Will fail if any job does not complete, reporting all failures in one-shot.
    #[instrument(skip(self), level = "debug")]
    pub async fn run(self) -> Result<Report> {
        let task = self.task()?;
        let report = task.execute().await;
        for (name, outcome) in report.outcomes() {
            info!("{name} {outcome}");
        }

        report.clone().into_result()?;
        Ok(report)
    }
}
