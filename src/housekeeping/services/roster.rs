//! Service layer for role-scoped roster queries.

use crate::housekeeping::{
    domain::{HotelId, HousekeepingTask, Requester, Shift, StaffRole},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Caller-supplied narrowing for a roster query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterFilters {
    /// Calendar date to list; defaults to today when unset.
    pub date: Option<NaiveDate>,
    /// Shift to narrow to.
    pub shift: Option<Shift>,
    /// Hotel to list; only honoured for admin requesters.
    pub hotel_id: Option<HotelId>,
}

impl RosterFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            date: None,
            shift: None,
            hotel_id: None,
        }
    }

    /// Sets the date filter.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the shift filter.
    #[must_use]
    pub const fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = Some(shift);
        self
    }

    /// Sets the hotel filter.
    #[must_use]
    pub const fn with_hotel(mut self, hotel_id: HotelId) -> Self {
        self.hotel_id = Some(hotel_id);
        self
    }
}

/// Service-level errors for roster queries.
#[derive(Debug, Error)]
pub enum RosterQueryError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for roster query operations.
pub type RosterQueryResult<T> = Result<T, RosterQueryError>;

/// Roster query service: one scoping decision point for all roles.
#[derive(Clone)]
pub struct RosterQueryService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> RosterQueryService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new roster query service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the tasks the requester is entitled to see.
    ///
    /// Housekeeping staff see only their own queue; the hotel filter is
    /// ignored for them. Receptionists see their own hotel's roster, again
    /// ignoring the hotel filter. Admins see the hotel named in the filter,
    /// falling back to their own hotel when none is given. The date
    /// defaults to today. Results are sorted by room identifier so repeated
    /// queries return a stable order.
    ///
    /// # Errors
    ///
    /// Returns repository errors from the underlying listing.
    pub async fn list_tasks(
        &self,
        requester: &Requester,
        filters: RosterFilters,
    ) -> RosterQueryResult<Vec<HousekeepingTask>> {
        let date = filters
            .date
            .unwrap_or_else(|| self.clock.utc().date_naive());

        let mut tasks = match requester.role {
            StaffRole::Housekeeping => {
                self.repository
                    .list_by_assignee(requester.staff_id, date, filters.shift)
                    .await?
            }
            StaffRole::Receptionist => {
                self.repository
                    .list_by_hotel_and_date(requester.hotel_id, date, filters.shift)
                    .await?
            }
            StaffRole::Admin => {
                let hotel_id = filters.hotel_id.unwrap_or(requester.hotel_id);
                self.repository
                    .list_by_hotel_and_date(hotel_id, date, filters.shift)
                    .await?
            }
        };

        tasks.sort_by_key(|task| task.room_id().into_inner());
        Ok(tasks)
    }
}
