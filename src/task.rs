// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Task execution.
//!
//! Provides [`AsyncTask`], the unit that drives a set of [`Job`]s to completion, and the
//! [`Runnable`] interface it is consumed through.

mod job;
mod report;

pub use job::Job;
pub use report::{JobOutcome, Report};

use crate::{config::Settings, Error, Result};

use futures::{stream, StreamExt};
use std::{any::Any, thread, time::Duration};
use tokio::runtime::{Builder, Handle};
use tracing::{debug, info, instrument, trace, warn};

/// Unit that can be constructed without arguments and run once constructed.
pub trait Runnable: Sized {
    /// Construct new runnable unit.
    fn new() -> Self;

    /// Run unit, returning `true` on success.
    fn run(&self) -> bool;
}

/// Drive a set of named jobs concurrently behind a blocking call.
///
/// Jobs are executed on a [tokio] runtime. Each job runs on its own tokio task, such that a
/// failing or panicking job never cancels its siblings. The number of jobs executing at once, and
/// the time each job is allowed to take, are controlled through [`Settings`].
///
/// # Invariants
///
/// - Every attached job is executed exactly once per run.
/// - Outcomes are reported in the order jobs were attached.
/// - Running without jobs always succeeds.
///
/// [tokio]: https://docs.rs/tokio
#[derive(Clone, Debug, Default)]
pub struct AsyncTask {
    jobs: Vec<Job>,
    settings: Settings,
}

impl AsyncTask {
    /// Construct new task with no jobs and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct new task with no jobs and given settings.
    ///
    /// # Errors
    ///
    /// - Return [`Error::InvalidSettings`] if settings break their invariants.
    pub fn with_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { jobs: Vec::new(), settings })
    }

    /// Attach job to task.
    pub fn add_job(&mut self, job: Job) -> &mut Self {
        trace!("Attach job {:?}", job.name());
        self.jobs.push(job);
        self
    }

    /// Attach job to task, builder style.
    pub fn job(mut self, job: Job) -> Self {
        self.add_job(job);
        self
    }

    /// Names of attached jobs in attachment order.
    pub fn jobs(&self) -> impl Iterator<Item = &str> + '_ {
        self.jobs.iter().map(Job::name)
    }

    /// Current settings of task.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute all attached jobs asynchronously.
    ///
    /// Waits for _all_ jobs to finish before returning, whatever their outcome.
    #[instrument(skip(self), fields(jobs = self.jobs.len()), level = "debug")]
    pub async fn execute(&self) -> Report {
        // INVARIANT: Buffer at least one future, even with no jobs to run.
        let limit = self.settings.jobs.unwrap_or(self.jobs.len()).max(1);
        let timeout = self.settings.timeout_duration();
        debug!("Execute with limit {limit} and timeout {timeout:?}");

        let outcomes = stream::iter(&self.jobs)
            .map(|job| async move { (job.name().to_string(), run_job(job, timeout).await) })
            .buffered(limit)
            .collect::<Vec<_>>()
            .await;

        let report = Report::from(outcomes);
        info!("{} of {} job(s) completed", report.completed().count(), report.len());
        report
    }

    /// Execute all attached jobs, blocking until they finish.
    ///
    /// Returns an empty report right away when no jobs are attached. Otherwise, drives
    /// [`AsyncTask::execute`] on a private current-thread runtime. When called from within
    /// an active tokio runtime, the private runtime is driven on a scoped helper thread instead,
    /// because runtimes cannot be nested on one thread.
    ///
    /// # Errors
    ///
    /// - Return [`Error::Io`] if runtime cannot be constructed.
    /// - Return [`Error::RuntimePanic`] if helper thread panics.
    pub fn try_run(&self) -> Result<Report> {
        // INVARIANT: Without jobs, no runtime or thread is ever spawned.
        if self.jobs.is_empty() {
            trace!("No jobs attached, nothing to run");
            return Ok(Report::default());
        }

        if Handle::try_current().is_err() {
            return self.block_on_execute();
        }

        debug!("Runtime already active, drive jobs on helper thread");
        thread::scope(|scope| match scope.spawn(|| self.block_on_execute()).join() {
            Ok(result) => result,
            Err(payload) => Err(Error::RuntimePanic { message: panic_message(payload.as_ref()) }),
        })
    }

    fn block_on_execute(&self) -> Result<Report> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(runtime.block_on(self.execute()))
    }
}

impl Runnable for AsyncTask {
    fn new() -> Self {
        AsyncTask::new()
    }

    fn run(&self) -> bool {
        match self.try_run() {
            Ok(report) => report.is_success(),
            Err(error) => {
                warn!("Task could not run: {error}");
                false
            }
        }
    }
}

async fn run_job(job: &Job, timeout: Option<Duration>) -> JobOutcome {
    trace!("Start job {:?}", job.name());
    let work = job.work();
    let handle = tokio::spawn(async move {
        match timeout {
            Some(limit) => tokio::time::timeout(limit, work).await.map_err(|_| limit),
            None => Ok(work.await),
        }
    });

    let outcome = match handle.await {
        Ok(Ok(Ok(()))) => JobOutcome::Completed,
        Ok(Ok(Err(error))) => JobOutcome::Failed(format!("{error:#}")),
        Ok(Err(limit)) => JobOutcome::TimedOut(limit),
        Err(error) if error.is_panic() => {
            JobOutcome::Panicked(panic_message(error.into_panic().as_ref()))
        }
        Err(error) => JobOutcome::Failed(error.to_string()),
    };

    match &outcome {
        JobOutcome::Completed => debug!("Job {:?} completed", job.name()),
        outcome => warn!("Job {:?} {outcome}", job.name()),
    }

    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }

    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }

    "unknown panic payload".into()
}
