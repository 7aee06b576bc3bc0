//! Uniqueness and conditional-write guarantees of the in-memory store.

use super::helpers::{Stack, date};
use eyre::ensure;
use mockable::DefaultClock;
use turndown::housekeeping::{
    domain::{HotelId, HousekeepingTask, RoomId, Shift, TaskStatus, TaskType},
    ports::{TaskRepository, TaskRepositoryError},
};

fn pending_task(hotel_id: HotelId, room_id: RoomId) -> HousekeepingTask {
    HousekeepingTask::new(
        hotel_id,
        room_id,
        date(2024, 6, 1),
        Shift::Morning,
        TaskType::RoutineCleaning,
        None,
        &DefaultClock,
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_room_date_insert_is_rejected() -> eyre::Result<()> {
    let stack = Stack::new();
    let hotel_id = HotelId::new();
    let room_id = RoomId::new();

    stack.repository.store(&pending_task(hotel_id, room_id)).await?;
    let result = stack.repository.store(&pending_task(hotel_id, room_id)).await;

    ensure!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateRoomDate { .. })
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn stale_status_write_loses_the_race() -> eyre::Result<()> {
    let stack = Stack::new();
    let task = pending_task(HotelId::new(), RoomId::new());
    stack.repository.store(&task).await?;

    // Two actors read the same pending task.
    let mut first = task.clone();
    let mut second = task.clone();
    first.transition_to(TaskStatus::InProgress, &DefaultClock)?;
    second.transition_to(TaskStatus::Skipped, &DefaultClock)?;

    stack
        .repository
        .update_status(task.id(), TaskStatus::Pending, &first)
        .await?;
    let result = stack
        .repository
        .update_status(task.id(), TaskStatus::Pending, &second)
        .await;

    ensure!(matches!(result, Err(TaskRepositoryError::StaleStatus(_))));
    let stored = stack
        .repository
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;
    ensure!(stored.status() == TaskStatus::InProgress);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn conditional_write_against_missing_task_is_not_found() -> eyre::Result<()> {
    let stack = Stack::new();
    let mut task = pending_task(HotelId::new(), RoomId::new());
    task.transition_to(TaskStatus::InProgress, &DefaultClock)?;

    let result = stack
        .repository
        .update_status(task.id(), TaskStatus::Pending, &task)
        .await;

    ensure!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
    Ok(())
}
