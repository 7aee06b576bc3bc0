//! In-memory adapter implementations for tests and local wiring.

mod directory;
mod task;

pub use directory::InMemoryHotelDirectory;
pub use task::InMemoryTaskRepository;
