//! Error types for housekeeping domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HousekeepingDomainError {
    /// The requested status transition is not in the allowed graph.
    #[error("invalid status transition for task {task_id}: {} -> {}", from.as_str(), to.as_str())]
    InvalidStatusTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// The task has reached a terminal status and no longer accepts changes.
    #[error("task {0} is closed and cannot be modified")]
    TaskAlreadyClosed(TaskId),

    /// The room number is empty or contains control characters.
    #[error("invalid room number '{0}'")]
    InvalidRoomNumber(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing shifts from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown shift: {0}")]
pub struct ParseShiftError(pub String);

/// Error returned while parsing task types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskTypeError(pub String);

/// Error returned while parsing staff roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown staff role: {0}")]
pub struct ParseStaffRoleError(pub String);
