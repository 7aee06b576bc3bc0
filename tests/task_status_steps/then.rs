//! Then steps for task status transition BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::then;
use turndown::housekeeping::{
    domain::{HousekeepingDomainError, TaskStatus},
    ports::TaskRepository,
    services::TaskLifecycleError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;
    let stored = run_async(world.repository.find_by_id(task.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }

    Ok(())
}

#[then("the transition fails with a forbidden error")]
fn transition_fails_forbidden(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(result, Err(TaskLifecycleError::Forbidden { .. })) {
        return Err(eyre::eyre!("expected Forbidden error, got {result:?}"));
    }

    Ok(())
}

#[then("the transition fails with an invalid transition error")]
fn transition_fails_invalid(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            HousekeepingDomainError::InvalidStatusTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidStatusTransition error, got {result:?}"
        ));
    }

    Ok(())
}

#[then("the completion timestamp is set")]
fn completion_timestamp_is_set(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task"))?;

    if task.completed_at().is_none() {
        return Err(eyre::eyre!("expected completed_at to be set"));
    }

    Ok(())
}
