//! End-to-end workflow: generate, assign, work the task, query the roster.

use super::helpers::{Stack, date};
use eyre::ensure;
use turndown::housekeeping::{
    domain::{Requester, StaffId, StaffRole, TaskStatus},
    services::RosterFilters,
};

#[tokio::test(flavor = "multi_thread")]
async fn full_day_workflow() -> eyre::Result<()> {
    let stack = Stack::new();
    let (hotel_id, _) = stack.seed_hotel(&["201", "202", "203"])?;
    let work_date = date(2024, 6, 1);
    stack
        .generator
        .generate_daily_tasks(hotel_id, work_date)
        .await?;

    let admin = Requester::new(StaffId::new(), StaffRole::Admin, hotel_id);
    let staff_id = StaffId::new();
    let roster = stack
        .roster
        .list_tasks(&admin, RosterFilters::none().with_date(work_date))
        .await?;
    ensure!(roster.len() == 3);

    // Assign the first two rooms to one housekeeper.
    for task in roster.iter().take(2) {
        stack.lifecycle.assign_task(task.id(), staff_id, &admin).await?;
    }

    let housekeeper = Requester::new(staff_id, StaffRole::Housekeeping, hotel_id);
    let queue = stack
        .roster
        .list_tasks(&housekeeper, RosterFilters::none().with_date(work_date))
        .await?;
    ensure!(queue.len() == 2);
    ensure!(queue.iter().all(|task| task.assigned_staff_id() == Some(staff_id)));

    // Work one task to completion, skip the other.
    let first = queue[0].id();
    let second = queue[1].id();
    stack
        .lifecycle
        .update_task_status(first, TaskStatus::InProgress, &housekeeper)
        .await?;
    let completed = stack
        .lifecycle
        .update_task_status(first, TaskStatus::Completed, &housekeeper)
        .await?;
    ensure!(completed.completed_at().is_some());
    stack
        .lifecycle
        .update_task_status(second, TaskStatus::Skipped, &housekeeper)
        .await?;

    let final_roster = stack
        .roster
        .list_tasks(&admin, RosterFilters::none().with_date(work_date))
        .await?;
    let statuses = final_roster
        .iter()
        .map(|task| task.status())
        .collect::<Vec<_>>();
    ensure!(statuses.contains(&TaskStatus::Completed));
    ensure!(statuses.contains(&TaskStatus::Skipped));
    ensure!(statuses.contains(&TaskStatus::Pending));
    Ok(())
}
