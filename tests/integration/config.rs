// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::setup_config_home;

use asynctask::Settings;

use anyhow::Result;
use pretty_assertions::assert_eq as pretty_assert_eq;
use sealed_test::prelude::*;
use std::fs::write;

#[sealed_test]
fn settings_load_missing_file() -> Result<()> {
    setup_config_home()?;
    pretty_assert_eq!(Settings::load()?, Settings::default());
    Ok(())
}

#[sealed_test]
fn settings_load_from_default_file() -> Result<()> {
    let config_home = setup_config_home()?;
    write(config_home.join("asynctask/config.toml"), "jobs = 4\ntimeout = 30\n")?;
    pretty_assert_eq!(Settings::load()?, Settings { jobs: Some(4), timeout: Some(30) });
    Ok(())
}

#[sealed_test(env = [("ASYNCTASK_JOBS", "2")])]
fn settings_load_env_overrides_file() -> Result<()> {
    let config_home = setup_config_home()?;
    write(config_home.join("asynctask/config.toml"), "jobs = 4\ntimeout = 30\n")?;
    pretty_assert_eq!(Settings::load()?, Settings { jobs: Some(2), timeout: Some(30) });
    Ok(())
}

#[sealed_test]
fn settings_load_invalid() -> Result<()> {
    let config_home = setup_config_home()?;
    write(config_home.join("asynctask/config.toml"), "jobs = 0\n")?;
    assert!(Settings::load().is_err());

    write(config_home.join("asynctask/config.toml"), "jobs = \"many\"\n")?;
    assert!(Settings::load().is_err());

    write(config_home.join("asynctask/config.toml"), "jobs = [\n")?;
    assert!(Settings::load().is_err());
    Ok(())
}

#[sealed_test]
fn settings_load_from_explicit_file() -> Result<()> {
    setup_config_home()?;
    write("custom.toml", "timeout = 5\n")?;
    let settings = Settings::load_from("custom.toml")?;
    pretty_assert_eq!(settings, Settings { jobs: None, timeout: Some(5) });
    assert!(Settings::load_from("absent.toml").is_err());
    Ok(())
}
