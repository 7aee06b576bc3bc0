//! Acting-staff identity and role policy for roster operations.

use super::{HotelId, ParseStaffRoleError, StaffId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by a staff member acting on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Housekeeping staff; limited to their own task queue.
    Housekeeping,
    /// Front-desk staff; may act on any task in their hotel.
    Receptionist,
    /// Administrator; may act on any task.
    Admin,
}

impl StaffRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Housekeeping => "housekeeping",
            Self::Receptionist => "receptionist",
            Self::Admin => "admin",
        }
    }

    /// Returns whether this role may act on tasks assigned to others.
    #[must_use]
    pub const fn can_override_assignment(self) -> bool {
        matches!(self, Self::Receptionist | Self::Admin)
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StaffRole {
    type Error = ParseStaffRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "housekeeping" => Ok(Self::Housekeeping),
            "receptionist" => Ok(Self::Receptionist),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseStaffRoleError(value.to_owned())),
        }
    }
}

/// Identity of the staff member issuing a roster request.
///
/// Supplied by the surrounding session/auth collaborator; the core only
/// trusts its shape, never re-authenticates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    /// Staff member identifier.
    pub staff_id: StaffId,
    /// Role held by the staff member.
    pub role: StaffRole,
    /// Hotel the staff member belongs to.
    pub hotel_id: HotelId,
}

impl Requester {
    /// Creates a requester identity.
    #[must_use]
    pub const fn new(staff_id: StaffId, role: StaffRole, hotel_id: HotelId) -> Self {
        Self {
            staff_id,
            role,
            hotel_id,
        }
    }

    /// Returns whether the requester may act on a task assigned to `assignee`.
    ///
    /// Elevated roles may always act; housekeeping staff only on their own
    /// queue, and never on an unassigned task.
    #[must_use]
    pub fn may_act_on(&self, assignee: Option<StaffId>) -> bool {
        if self.role.can_override_assignment() {
            return true;
        }
        assignee == Some(self.staff_id)
    }
}
