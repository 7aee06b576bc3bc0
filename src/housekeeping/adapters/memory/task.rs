//! In-memory repository for housekeeping lifecycle tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::housekeeping::{
    domain::{HotelId, HousekeepingTask, RoomId, Shift, StaffId, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

type RoomDateKey = (HotelId, RoomId, NaiveDate);

/// Thread-safe in-memory task repository.
///
/// Enforces the same `(hotel, room, date)` uniqueness and conditional
/// status-write guarantees the production store provides, so service tests
/// exercise the real conflict paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, HousekeepingTask>,
    room_date_index: HashMap<RoomDateKey, TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn room_date_key(task: &HousekeepingTask) -> RoomDateKey {
    (task.hotel_id(), task.room_id(), task.date())
}

fn matches_shift(task: &HousekeepingTask, shift: Option<Shift>) -> bool {
    shift.is_none_or(|wanted| task.shift() == wanted)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &HousekeepingTask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let key = room_date_key(task);
        if state.room_date_index.contains_key(&key) {
            return Err(TaskRepositoryError::DuplicateRoomDate {
                hotel_id: task.hotel_id(),
                room_id: task.room_id(),
                date: task.date(),
            });
        }

        state.room_date_index.insert(key, task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: TaskId,
        expected: TaskStatus,
        task: &HousekeepingTask,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let stored = state
            .tasks
            .get(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        if stored.status() != expected {
            return Err(TaskRepositoryError::StaleStatus(id));
        }

        state.tasks.insert(id, task.clone());
        Ok(())
    }

    async fn update(&self, task: &HousekeepingTask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<HousekeepingTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_hotel_and_date(
        &self,
        hotel_id: HotelId,
        date: NaiveDate,
        shift: Option<Shift>,
    ) -> TaskRepositoryResult<Vec<HousekeepingTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| {
                task.hotel_id() == hotel_id && task.date() == date && matches_shift(task, shift)
            })
            .cloned()
            .collect())
    }

    async fn list_by_assignee(
        &self,
        staff_id: StaffId,
        date: NaiveDate,
        shift: Option<Shift>,
    ) -> TaskRepositoryResult<Vec<HousekeepingTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| {
                task.assigned_staff_id() == Some(staff_id)
                    && task.date() == date
                    && matches_shift(task, shift)
            })
            .cloned()
            .collect())
    }
}
