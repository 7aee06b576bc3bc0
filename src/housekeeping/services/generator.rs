//! Service layer for daily housekeeping task generation.

use crate::housekeeping::{
    domain::{HotelId, HousekeepingTask, Shift, TaskType},
    ports::{HotelDirectory, HotelDirectoryError, TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Outcome counts for one generation sweep.
///
/// Tasks are independent units; a sweep never rolls back rooms that have
/// already been persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Rooms for which a new task was created.
    pub created: usize,
    /// Rooms that already had a task for the date.
    pub skipped: usize,
    /// Rooms whose insert failed for a reason other than duplication.
    pub failures: usize,
}

/// Service-level errors for task generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No hotel exists with the given identifier.
    #[error("hotel {0} not found")]
    HotelNotFound(HotelId),

    /// The hotel exists but is not operating.
    #[error("hotel {0} is inactive")]
    HotelInactive(HotelId),

    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] HotelDirectoryError),

    /// A sweep-scoped repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for generation service operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Daily task generation service.
#[derive(Clone)]
pub struct DailyTaskGenerator<R, D, C>
where
    R: TaskRepository,
    D: HotelDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<R, D, C> DailyTaskGenerator<R, D, C>
where
    R: TaskRepository,
    D: HotelDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new generation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
        }
    }

    /// Produces the day's task set for a hotel, one task per room.
    ///
    /// Rooms with a checkout on `date` receive a checkout cleaning task,
    /// all others a routine cleaning task; every task starts pending,
    /// unassigned, on the morning shift. The sweep is idempotent: rooms
    /// that already carry a task for the date are counted as skipped, and a
    /// store-side `(hotel, room, date)` uniqueness conflict in the window
    /// between listing and inserting is treated the same way, never as a
    /// fatal error.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::HotelNotFound`] or
    /// [`GenerationError::HotelInactive`] when the hotel cannot be swept,
    /// and directory or repository errors when the sweep-scoped reads fail.
    /// Per-room insert failures do not abort the sweep; they are tallied in
    /// [`GenerationReport::failures`].
    pub async fn generate_daily_tasks(
        &self,
        hotel_id: HotelId,
        date: NaiveDate,
    ) -> GenerationResult<GenerationReport> {
        let hotel = self
            .directory
            .find_hotel(hotel_id)
            .await?
            .ok_or(GenerationError::HotelNotFound(hotel_id))?;
        if !hotel.active {
            return Err(GenerationError::HotelInactive(hotel_id));
        }

        let rooms = self.directory.rooms_for_hotel(hotel_id).await?;
        let checkouts = self.directory.checkouts_on(hotel_id, date).await?;
        let existing = self
            .repository
            .list_by_hotel_and_date(hotel_id, date, None)
            .await?
            .iter()
            .map(HousekeepingTask::room_id)
            .collect::<HashSet<_>>();

        let mut report = GenerationReport::default();
        for room in rooms {
            if existing.contains(&room.id) {
                report.skipped += 1;
                continue;
            }

            let task_type = if checkouts.contains(&room.id) {
                TaskType::CheckoutCleaning
            } else {
                TaskType::RoutineCleaning
            };
            let task = HousekeepingTask::new(
                hotel_id,
                room.id,
                date,
                Shift::Morning,
                task_type,
                None,
                &*self.clock,
            );

            match self.repository.store(&task).await {
                Ok(()) => report.created += 1,
                // Lost the race against a concurrent sweep for this room.
                Err(TaskRepositoryError::DuplicateRoomDate { .. }) => report.skipped += 1,
                Err(_) => report.failures += 1,
            }
        }

        Ok(report)
    }
}
