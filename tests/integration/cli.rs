// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::setup_config_home;

use anyhow::Result;
use assert_cmd::Command;
use sealed_test::prelude::*;
use simple_test_case::test_case;

#[test_case(vec![], exitcode::OK; "no commands")]
#[test_case(vec!["true", "echo hi"], exitcode::OK; "all succeed")]
#[test_case(vec!["true", "exit 1"], exitcode::SOFTWARE; "one fails")]
#[test_case(vec!["--jobs", "0", "true"], exitcode::CONFIG; "invalid job limit")]
#[test_case(vec!["--timeout", "1", "sleep 5"], exitcode::SOFTWARE; "timed out")]
#[sealed_test]
fn cli_exit_status(args: Vec<&str>, expect: exitcode::ExitCode) -> Result<()> {
    let config_home = setup_config_home()?;
    Command::cargo_bin("asynctask")?
        .env("XDG_CONFIG_HOME", config_home)
        .args(args)
        .assert()
        .code(expect);
    Ok(())
}
