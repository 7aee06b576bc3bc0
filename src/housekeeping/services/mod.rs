//! Orchestration services for generation, lifecycle, and roster queries.

mod generator;
mod lifecycle;
mod roster;

pub use generator::{DailyTaskGenerator, GenerationError, GenerationReport, GenerationResult};
pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use roster::{RosterFilters, RosterQueryError, RosterQueryResult, RosterQueryService};
