// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Named units of asynchronous work.

use crate::utils::syscall_non_interactive;

use futures::future::{BoxFuture, FutureExt};
use std::{fmt, future::Future, sync::Arc};
use tracing::debug;

type JobFactory = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Named piece of asynchronous work.
///
/// A job does not hold a future directly. Instead, it holds a factory that produces a fresh future
/// for every execution, so the same job can be executed any number of times.
#[derive(Clone)]
pub struct Job {
    name: String,
    factory: JobFactory,
}

impl Job {
    /// Construct new job from future factory.
    pub fn new<F, Fut>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self { name: name.into(), factory: Arc::new(move || factory().boxed()) }
    }

    /// Construct new job that runs a shell command line through `sh -c`.
    ///
    /// Job fails if the shell cannot be spawned, or if the command line exits with non-zero
    /// status. Captured output is logged at debug level.
    pub fn command(name: impl Into<String>, command_line: impl Into<String>) -> Self {
        let name = name.into();
        let command_line = command_line.into();
        let label = name.clone();

        Self::new(name, move || {
            let label = label.clone();
            let command_line = command_line.clone();
            async move {
                let output = syscall_non_interactive("sh", ["-c", command_line.as_str()]).await?;
                if !output.is_empty() {
                    debug!("Job {label:?} output: {output}");
                }
                Ok(())
            }
        })
    }

    /// Name of job.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn work(&self) -> BoxFuture<'static, anyhow::Result<()>> {
        (self.factory)()
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use simple_test_case::test_case;

    #[test_case("echo hello", true; "success")]
    #[test_case("exit 1", false; "failure")]
    #[test_case("definitely_not_a_program_on_path", false; "missing program")]
    #[tokio::test]
    async fn smoke_job_command(command_line: &str, expect: bool) {
        let job = Job::command("shell", command_line);
        assert_eq!(job.work().await.is_ok(), expect);
    }

    #[tokio::test]
    async fn smoke_job_work_is_fresh_each_time() {
        let job = Job::new("again", || async { Ok(()) });
        assert!(job.work().await.is_ok());
        assert!(job.work().await.is_ok());
    }

    #[test]
    fn smoke_job_debug() {
        let job = Job::new("named", || async { Ok(()) });
        assert_eq!(job.name(), "named");
        assert_eq!(format!("{job:?}"), "Job { name: \"named\", .. }");
    }
}
