// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use asynctask::{AsyncTask, Job, JobOutcome, Runnable};

use std::any::{Any, TypeId};

fn construct<R: Runnable>() -> R {
    R::new()
}

#[test]
fn async_task_initialization() {
    let instance = construct::<AsyncTask>();
    assert_eq!((&instance as &dyn Any).type_id(), TypeId::of::<AsyncTask>());
}

#[test]
fn async_task_run_method() {
    let instance = construct::<AsyncTask>();
    assert!(instance.run());
}

#[test]
fn async_task_run_command_jobs() {
    let instance = AsyncTask::new()
        .job(Job::command("greet", "echo hello"))
        .job(Job::command("fail", "exit 2"));

    let report = instance.try_run().unwrap();
    assert_eq!(report.completed().collect::<Vec<_>>(), vec!["greet"]);
    assert!(matches!(report.outcomes()[1].1, JobOutcome::Failed(..)));
    assert!(!instance.run());
}
