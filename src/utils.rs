// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! General utilities.
//!
//! Provides basic general miscellaneous utilities to make life easier. These utilities were placed
//! here either because they did not seem to fit the purpose of other modules, but were still
//! important enough to have around.

use anyhow::{anyhow, Context, Result};
use std::{ffi::OsStr, process::Stdio};
use tokio::process::Command;

/// Call external shell program non-interactively.
///
/// Will pipe stdout and stderr to child process, waiting to collect all output and combine it into
/// a singular string to be returned and handled by the caller. This child process cannot be
/// interacted with. In fact, any attempts to use stdin will close the stream.
///
/// The combined output of stdout and stderr is labeled "stdout: {stdout}" and "stderr: {stderr}"
/// in the returned string respectively.
///
/// The spawned child process is killed if the returned future is dropped before completion.
/// Processes that the child itself spawned are not killed, and keep running.
///
/// # Errors
///
/// - Will fail if external shell program cannot be found.
/// - Will fail if external shell program exits with non-zero status.
pub async fn syscall_non_interactive(
    cmd: impl AsRef<OsStr>,
    args: impl IntoIterator<Item = impl AsRef<OsStr>>,
) -> Result<String> {
    let program = cmd.as_ref().to_string_lossy().into_owned();
    let output = Command::new(cmd.as_ref())
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .with_context(|| format!("Failed to spawn {program:?}"))?;
    let stdout = String::from_utf8_lossy(output.stdout.as_slice()).into_owned();
    let stderr = String::from_utf8_lossy(output.stderr.as_slice()).into_owned();
    let mut message = String::new();

    if !stdout.is_empty() {
        message.push_str(format!("stdout: {stdout}").as_str());
    }

    if !stderr.is_empty() {
        message.push_str(format!("stderr: {stderr}").as_str());
    }

    if !output.status.success() {
        return Err(anyhow!("{program:?} exited with {}: {message}", output.status));
    }

    // INVARIANT: Chomp trailing newlines.
    let message = message
        .strip_suffix("\r\n")
        .or(message.strip_suffix('\n'))
        .map(ToString::to_string)
        .unwrap_or(message);

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    use simple_test_case::test_case;

    #[test_case(
        "sh",
        vec!["-c".into(), "echo hello".into()],
        Some("stdout: hello".into());
        "no error"
    )]
    #[test_case("sh", vec!["-c".into(), "true".into()], Some(String::new()); "no output")]
    #[test_case("not_found", vec!["fail".into()], None; "no program")]
    #[test_case("sh", vec!["-c".into(), "exit 3".into()], None; "bad exit status")]
    #[tokio::test]
    async fn smoke_syscall_non_interactive(cmd: &str, args: Vec<String>, expect: Option<String>) {
        let result = syscall_non_interactive(cmd, args).await;
        match expect {
            Some(message) => assert_eq!(result.unwrap(), message),
            None => assert!(result.is_err()),
        }
    }
}
