//! Port contracts for housekeeping persistence and directory collaborators.

mod directory;
mod repository;

pub use directory::{
    HotelDirectory, HotelDirectoryError, HotelDirectoryResult, HotelRecord, RoomRecord,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
