//! When steps for task status transition BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use turndown::housekeeping::domain::{Requester, StaffRole, TaskStatus};

#[when(r#"staff "{name}" moves the task to "{status}""#)]
fn move_task(
    world: &mut TaskStatusWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let staff_id = world.staff_id(&name);
    let requester = Requester::new(staff_id, StaffRole::Housekeeping, world.hotel_id);
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let result = run_async(world.service.update_task_status(task.id(), target, &requester));
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}
