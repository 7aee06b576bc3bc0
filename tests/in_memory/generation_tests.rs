//! Generation sweep behaviour over the public API.

use super::helpers::{Stack, date};
use eyre::ensure;
use turndown::housekeeping::{
    domain::{HousekeepingTask, Requester, StaffId, StaffRole, TaskStatus, TaskType},
    services::{GenerationReport, RosterFilters},
};

#[tokio::test(flavor = "multi_thread")]
async fn sweep_creates_routine_and_checkout_tasks() -> eyre::Result<()> {
    let stack = Stack::new();
    let (hotel_id, rooms) = stack.seed_hotel(&["R1", "R2"])?;
    let sweep_date = date(2024, 6, 1);
    stack.directory.add_checkout(hotel_id, rooms[1], sweep_date)?;

    let report = stack
        .generator
        .generate_daily_tasks(hotel_id, sweep_date)
        .await?;
    ensure!(
        report
            == GenerationReport {
                created: 2,
                skipped: 0,
                failures: 0
            }
    );

    let receptionist = Requester::new(StaffId::new(), StaffRole::Receptionist, hotel_id);
    let tasks = stack
        .roster
        .list_tasks(&receptionist, RosterFilters::none().with_date(sweep_date))
        .await?;
    ensure!(tasks.len() == 2);
    ensure!(tasks.iter().all(|task| task.status() == TaskStatus::Pending));

    let task_type_for = |room| {
        tasks
            .iter()
            .find(|task| task.room_id() == room)
            .map(HousekeepingTask::task_type)
    };
    ensure!(task_type_for(rooms[0]) == Some(TaskType::RoutineCleaning));
    ensure!(task_type_for(rooms[1]) == Some(TaskType::CheckoutCleaning));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn second_sweep_reports_only_skips() -> eyre::Result<()> {
    let stack = Stack::new();
    let (hotel_id, _) = stack.seed_hotel(&["R1", "R2"])?;
    let sweep_date = date(2024, 6, 1);

    stack
        .generator
        .generate_daily_tasks(hotel_id, sweep_date)
        .await?;
    let second = stack
        .generator
        .generate_daily_tasks(hotel_id, sweep_date)
        .await?;

    ensure!(
        second
            == GenerationReport {
                created: 0,
                skipped: 2,
                failures: 0
            }
    );
    Ok(())
}
