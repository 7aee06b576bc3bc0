//! Domain model for housekeeping task lifecycle management.
//!
//! The housekeeping domain models daily task generation, status transitions
//! along a closed graph, and role-based acting policy while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod staff;
mod task;

pub use error::{
    HousekeepingDomainError, ParseShiftError, ParseStaffRoleError, ParseTaskStatusError,
    ParseTaskTypeError,
};
pub use ids::{HotelId, RoomId, RoomNumber, StaffId, TaskId};
pub use staff::{Requester, StaffRole};
pub use task::{HousekeepingTask, PersistedHousekeepingTaskData, Shift, TaskStatus, TaskType};
