//! Repository port for housekeeping task persistence and roster lookup.

use crate::housekeeping::domain::{
    HotelId, HousekeepingTask, RoomId, Shift, StaffId, TaskId, TaskStatus,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Housekeeping task persistence contract.
///
/// The store owns two invariants the services rely on: at most one task per
/// `(hotel, room, date)` tuple, and serialized status writes per task via
/// the conditional [`update_status`](TaskRepository::update_status).
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists or [`TaskRepositoryError::DuplicateRoomDate`] when a
    /// task for the same `(hotel, room, date)` tuple already exists.
    async fn store(&self, task: &HousekeepingTask) -> TaskRepositoryResult<()>;

    /// Persists a status change only when the stored status still equals
    /// `expected`.
    ///
    /// This is the compare-and-set that keeps concurrent transition requests
    /// against the same task from corrupting the transition graph: the race
    /// loser observes [`TaskRepositoryError::StaleStatus`] instead of
    /// overwriting the winner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist and [`TaskRepositoryError::StaleStatus`] when the stored status
    /// no longer matches `expected`.
    async fn update_status(
        &self,
        id: TaskId,
        expected: TaskStatus,
        task: &HousekeepingTask,
    ) -> TaskRepositoryResult<()>;

    /// Persists non-status changes to an existing task (assignment,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &HousekeepingTask) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<HousekeepingTask>>;

    /// Returns the tasks for a hotel on a date, optionally narrowed to one
    /// shift.
    async fn list_by_hotel_and_date(
        &self,
        hotel_id: HotelId,
        date: NaiveDate,
        shift: Option<Shift>,
    ) -> TaskRepositoryResult<Vec<HousekeepingTask>>;

    /// Returns the tasks assigned to a staff member on a date, optionally
    /// narrowed to one shift.
    async fn list_by_assignee(
        &self,
        staff_id: StaffId,
        date: NaiveDate,
        shift: Option<Shift>,
    ) -> TaskRepositoryResult<Vec<HousekeepingTask>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A task for the room and date already exists.
    #[error("task already exists for hotel {hotel_id}, room {room_id} on {date}")]
    DuplicateRoomDate {
        /// Hotel of the conflicting task.
        hotel_id: HotelId,
        /// Room of the conflicting task.
        room_id: RoomId,
        /// Date of the conflicting task.
        date: NaiveDate,
    },

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A conditional status write observed a status other than expected.
    #[error("stale status for task {0}; re-fetch and retry")]
    StaleStatus(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
