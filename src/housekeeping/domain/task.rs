//! Housekeeping task aggregate root and related lifecycle types.

use super::{
    HotelId, HousekeepingDomainError, ParseShiftError, ParseTaskStatusError, ParseTaskTypeError,
    RoomId, StaffId, TaskId,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day partition a task is scheduled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Morning shift; the default for generated tasks.
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Night shift.
    Night,
}

impl Shift {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Shift {
    type Error = ParseShiftError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "night" => Ok(Self::Night),
            _ => Err(ParseShiftError(value.to_owned())),
        }
    }
}

/// Kind of cleaning a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Standard daily cleaning not tied to a guest departure.
    RoutineCleaning,
    /// Cleaning triggered by a guest checkout on the task date.
    CheckoutCleaning,
}

impl TaskType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoutineCleaning => "routine_cleaning",
            Self::CheckoutCleaning => "checkout_cleaning",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "routine_cleaning" => Ok(Self::RoutineCleaning),
            "checkout_cleaning" => Ok(Self::CheckoutCleaning),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been generated but work has not started.
    Pending,
    /// A staff member is working on the task.
    InProgress,
    /// Task has been finished.
    Completed,
    /// Task was deliberately not carried out.
    Skipped,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress | Self::Skipped)
                | (Self::InProgress, Self::Completed)
        )
    }

    /// Returns whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Skipped)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "skipped" => Ok(Self::Skipped),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Housekeeping task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousekeepingTask {
    id: TaskId,
    hotel_id: HotelId,
    room_id: RoomId,
    date: NaiveDate,
    shift: Shift,
    task_type: TaskType,
    status: TaskStatus,
    assigned_staff_id: Option<StaffId>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedHousekeepingTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning hotel.
    pub hotel_id: HotelId,
    /// Persisted target room.
    pub room_id: RoomId,
    /// Persisted calendar date.
    pub date: NaiveDate,
    /// Persisted shift assignment.
    pub shift: Shift,
    /// Persisted cleaning kind.
    pub task_type: TaskType,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted assignee, if any.
    pub assigned_staff_id: Option<StaffId>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl HousekeepingTask {
    /// Creates a new pending task for a room on a given date.
    #[must_use]
    pub fn new(
        hotel_id: HotelId,
        room_id: RoomId,
        date: NaiveDate,
        shift: Shift,
        task_type: TaskType,
        assigned_staff_id: Option<StaffId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            hotel_id,
            room_id,
            date,
            shift,
            task_type,
            status: TaskStatus::Pending,
            assigned_staff_id,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedHousekeepingTaskData) -> Self {
        Self {
            id: data.id,
            hotel_id: data.hotel_id,
            room_id: data.room_id,
            date: data.date,
            shift: data.shift,
            task_type: data.task_type,
            status: data.status,
            assigned_staff_id: data.assigned_staff_id,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning hotel.
    #[must_use]
    pub const fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }

    /// Returns the target room.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the calendar date the task applies to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the shift assignment.
    #[must_use]
    pub const fn shift(&self) -> Shift {
        self.shift
    }

    /// Returns the cleaning kind.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assigned staff member, if any.
    #[must_use]
    pub const fn assigned_staff_id(&self) -> Option<StaffId> {
        self.assigned_staff_id
    }

    /// Returns the completion timestamp, set once on entering `completed`.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `target` when the transition graph allows it.
    ///
    /// Entering [`TaskStatus::Completed`] records `completed_at` exactly
    /// once; no other transition touches it. A rejected transition leaves
    /// the aggregate unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HousekeepingDomainError::InvalidStatusTransition`] when the
    /// transition is not allowed.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), HousekeepingDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(HousekeepingDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }

        self.status = target;
        if target == TaskStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(clock.utc());
        }
        self.touch(clock);
        Ok(())
    }

    /// Assigns or reassigns the task to a staff member.
    ///
    /// # Errors
    ///
    /// Returns [`HousekeepingDomainError::TaskAlreadyClosed`] when the task
    /// has reached a terminal status.
    pub fn assign_to(
        &mut self,
        staff_id: StaffId,
        clock: &impl Clock,
    ) -> Result<(), HousekeepingDomainError> {
        if self.status.is_terminal() {
            return Err(HousekeepingDomainError::TaskAlreadyClosed(self.id));
        }
        self.assigned_staff_id = Some(staff_id);
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
