//! Service layer for task status transitions and assignment.

use crate::housekeeping::{
    domain::{HousekeepingDomainError, HousekeepingTask, Requester, StaffId, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The requester may not act on the task.
    #[error("staff {staff_id} may not act on task {task_id}")]
    Forbidden {
        /// Task the requester tried to act on.
        task_id: TaskId,
        /// Requesting staff member.
        staff_id: StaffId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] HousekeepingDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<HousekeepingTask> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Moves a task to the requested status on behalf of a staff member.
    ///
    /// The requester must be the task's assignee or hold an override role
    /// (admin or receptionist). The write is conditional on the status the
    /// task held when it was read, so a concurrent transition surfaces as
    /// [`TaskRepositoryError::StaleStatus`] for the race loser; the caller
    /// may re-fetch and retry if the transition is still wanted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// ID, [`TaskLifecycleError::Forbidden`] when the requester may not act
    /// on it, domain errors for transitions outside the allowed graph, and
    /// repository errors for persistence failures.
    pub async fn update_task_status(
        &self,
        task_id: TaskId,
        requested: TaskStatus,
        requester: &Requester,
    ) -> TaskLifecycleResult<HousekeepingTask> {
        let mut task = self.find_task_or_error(task_id).await?;
        if !requester.may_act_on(task.assigned_staff_id()) {
            return Err(TaskLifecycleError::Forbidden {
                task_id,
                staff_id: requester.staff_id,
            });
        }

        let previous = task.status();
        task.transition_to(requested, &*self.clock)?;
        self.repository
            .update_status(task_id, previous, &task)
            .await?;
        Ok(task)
    }

    /// Assigns a task to a housekeeping staff member.
    ///
    /// Only override roles may assign; housekeeping staff cannot claim
    /// tasks for themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// ID, [`TaskLifecycleError::Forbidden`] when the requester lacks an
    /// override role, [`HousekeepingDomainError::TaskAlreadyClosed`] when
    /// the task is terminal, and repository errors for persistence
    /// failures.
    pub async fn assign_task(
        &self,
        task_id: TaskId,
        staff_id: StaffId,
        requester: &Requester,
    ) -> TaskLifecycleResult<HousekeepingTask> {
        if !requester.role.can_override_assignment() {
            return Err(TaskLifecycleError::Forbidden {
                task_id,
                staff_id: requester.staff_id,
            });
        }

        let mut task = self.find_task_or_error(task_id).await?;
        task.assign_to(staff_id, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }
}
