//! Shared world state for task status transition BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use turndown::housekeeping::{
    adapters::memory::InMemoryTaskRepository,
    domain::{HotelId, HousekeepingTask, StaffId},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub service: TestTaskService,
    pub hotel_id: HotelId,
    pub staff: HashMap<String, StaffId>,
    pub task: Option<HousekeepingTask>,
    pub last_result: Option<Result<HousekeepingTask, TaskLifecycleError>>,
}

impl TaskStatusWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let service = TaskLifecycleService::new(repository.clone(), Arc::new(DefaultClock));

        Self {
            repository,
            service,
            hotel_id: HotelId::new(),
            staff: HashMap::new(),
            task: None,
            last_result: None,
        }
    }

    /// Returns the staff identifier registered under `name`, creating one on
    /// first use.
    pub fn staff_id(&mut self, name: &str) -> StaffId {
        *self
            .staff
            .entry(name.to_owned())
            .or_insert_with(StaffId::new)
    }

    /// Date every scenario task is generated for.
    #[must_use]
    pub fn task_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
