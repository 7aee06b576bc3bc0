//! Read-only port onto the hotel directory: hotels, rooms, and checkouts.

use crate::housekeeping::domain::{HotelId, RoomId, RoomNumber};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for hotel directory operations.
pub type HotelDirectoryResult<T> = Result<T, HotelDirectoryError>;

/// Hotel record as seen by the task generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelRecord {
    /// Hotel identifier.
    pub id: HotelId,
    /// Whether the hotel is operating.
    pub active: bool,
}

/// Room record as seen by the task generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    /// Room identifier.
    pub id: RoomId,
    /// Owning hotel.
    pub hotel_id: HotelId,
    /// Human-facing room label.
    pub number: RoomNumber,
}

/// Read contract onto hotel, room, and booking data.
///
/// Owned by the wider platform; the housekeeping core only ever reads
/// through it.
#[async_trait]
pub trait HotelDirectory: Send + Sync {
    /// Finds a hotel by identifier.
    ///
    /// Returns `None` when the hotel does not exist.
    async fn find_hotel(&self, hotel_id: HotelId) -> HotelDirectoryResult<Option<HotelRecord>>;

    /// Returns all rooms belonging to a hotel.
    async fn rooms_for_hotel(&self, hotel_id: HotelId) -> HotelDirectoryResult<Vec<RoomRecord>>;

    /// Returns the rooms with a booking checking out on `date`.
    async fn checkouts_on(
        &self,
        hotel_id: HotelId,
        date: NaiveDate,
    ) -> HotelDirectoryResult<HashSet<RoomId>>;
}

/// Errors returned by hotel directory implementations.
#[derive(Debug, Clone, Error)]
pub enum HotelDirectoryError {
    /// Persistence-layer failure.
    #[error("directory error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl HotelDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
