// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Outcome reporting for task runs.

use crate::{Error, Result};

use anyhow::anyhow;
use beau_collector::BeauCollector as _;
use std::{fmt, time::Duration};

/// Final state of a single job after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobOutcome {
    /// Job finished without error.
    Completed,

    /// Job returned an error.
    Failed(String),

    /// Job did not finish within the configured timeout.
    TimedOut(Duration),

    /// Job panicked.
    ///
    /// Only produced when panics unwind. Release builds set `panic = 'abort'`, such that a
    /// panicking job aborts the whole process instead.
    Panicked(String),
}

impl JobOutcome {
    /// Determine if job finished without error.
    pub fn is_completed(&self) -> bool {
        matches!(self, JobOutcome::Completed)
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobOutcome::Completed => write!(f, "completed"),
            JobOutcome::Failed(message) => write!(f, "failed: {message}"),
            JobOutcome::TimedOut(limit) => write!(f, "timed out after {limit:?}"),
            JobOutcome::Panicked(message) => write!(f, "panicked: {message}"),
        }
    }
}

/// Outcomes of every job in a run, in attachment order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<(String, JobOutcome)>,
}

impl Report {
    /// All job outcomes paired with job names.
    pub fn outcomes(&self) -> &[(String, JobOutcome)] {
        &self.outcomes
    }

    /// Determine if every job completed. Vacuously true for empty reports.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_completed())
    }

    /// Names of jobs that completed.
    pub fn completed(&self) -> impl Iterator<Item = &str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_completed())
            .map(|(name, _)| name.as_str())
    }

    /// Names of jobs that did not complete.
    pub fn failed(&self) -> impl Iterator<Item = &str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_completed())
            .map(|(name, _)| name.as_str())
    }

    /// Number of jobs in report.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Determine if report holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Convert report into result.
    ///
    /// # Errors
    ///
    /// - Return [`Error::JobsFailed`] holding _all_ failures encountered in one-shot.
    pub fn into_result(self) -> Result<()> {
        let count = self.failed().count();
        if count == 0 {
            return Ok(());
        }

        // INVARIANT: Collect and report _all_ failures encountered.
        self.outcomes
            .into_iter()
            .map(|(name, outcome)| match outcome {
                JobOutcome::Completed => Ok(()),
                outcome => Err(anyhow!("Job {name:?} {outcome}")),
            })
            .bcollect::<Vec<_>>()
            .map(|_| ())
            .map_err(|source| Error::JobsFailed { count, source })
    }
}

impl From<Vec<(String, JobOutcome)>> for Report {
    fn from(outcomes: Vec<(String, JobOutcome)>) -> Self {
        Self { outcomes }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in &self.outcomes {
            writeln!(f, "{name}: {outcome}")?;
        }
        Ok(())
    }
}
