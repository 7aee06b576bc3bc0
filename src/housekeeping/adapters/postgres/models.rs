//! Diesel row models for housekeeping task persistence.

use super::schema::housekeeping_tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for housekeeping task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = housekeeping_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HousekeepingTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning hotel.
    pub hotel_id: uuid::Uuid,
    /// Target room.
    pub room_id: uuid::Uuid,
    /// Calendar date the task applies to.
    pub date: NaiveDate,
    /// Scheduled shift.
    pub shift: String,
    /// Cleaning kind.
    pub task_type: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional assigned staff member.
    pub assigned_staff_id: Option<uuid::Uuid>,
    /// Completion timestamp, set on entering `completed`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for housekeeping task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = housekeeping_tasks)]
pub struct NewHousekeepingTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning hotel.
    pub hotel_id: uuid::Uuid,
    /// Target room.
    pub room_id: uuid::Uuid,
    /// Calendar date the task applies to.
    pub date: NaiveDate,
    /// Scheduled shift.
    pub shift: String,
    /// Cleaning kind.
    pub task_type: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional assigned staff member.
    pub assigned_staff_id: Option<uuid::Uuid>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
