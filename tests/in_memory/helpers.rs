//! Shared builders for in-memory integration tests.

use chrono::NaiveDate;
use mockable::DefaultClock;
use std::sync::Arc;
use turndown::housekeeping::{
    adapters::memory::{InMemoryHotelDirectory, InMemoryTaskRepository},
    domain::{HotelId, RoomId, RoomNumber},
    services::{DailyTaskGenerator, RosterQueryService, TaskLifecycleService},
};

pub type TestGenerator =
    DailyTaskGenerator<InMemoryTaskRepository, InMemoryHotelDirectory, DefaultClock>;
pub type TestLifecycle = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;
pub type TestRoster = RosterQueryService<InMemoryTaskRepository, DefaultClock>;

/// Fully wired in-memory stack for workflow tests.
pub struct Stack {
    pub repository: Arc<InMemoryTaskRepository>,
    pub directory: Arc<InMemoryHotelDirectory>,
    pub generator: TestGenerator,
    pub lifecycle: TestLifecycle,
    pub roster: TestRoster,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let directory = Arc::new(InMemoryHotelDirectory::new());
        let clock = Arc::new(DefaultClock);
        Self {
            generator: DailyTaskGenerator::new(repository.clone(), directory.clone(), clock.clone()),
            lifecycle: TaskLifecycleService::new(repository.clone(), clock.clone()),
            roster: RosterQueryService::new(repository.clone(), clock),
            repository,
            directory,
        }
    }

    /// Seeds an active hotel with the given room labels, returning the hotel
    /// and room identifiers in label order.
    pub fn seed_hotel(&self, labels: &[&str]) -> eyre::Result<(HotelId, Vec<RoomId>)> {
        let hotel_id = HotelId::new();
        self.directory.add_hotel(hotel_id, true)?;
        let mut rooms = Vec::with_capacity(labels.len());
        for label in labels {
            rooms.push(self.directory.add_room(hotel_id, RoomNumber::new(*label)?)?);
        }
        Ok((hotel_id, rooms))
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
