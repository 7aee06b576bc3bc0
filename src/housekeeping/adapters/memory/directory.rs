//! Seedable in-memory hotel directory for tests and local wiring.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::housekeeping::{
    domain::{HotelId, RoomId, RoomNumber},
    ports::{HotelDirectory, HotelDirectoryError, HotelDirectoryResult, HotelRecord, RoomRecord},
};

/// Thread-safe in-memory hotel directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    hotels: HashMap<HotelId, HotelRecord>,
    rooms: HashMap<HotelId, Vec<RoomRecord>>,
    checkouts: HashMap<(HotelId, NaiveDate), HashSet<RoomId>>,
}

impl InMemoryHotelDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a hotel record.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the directory lock is poisoned.
    pub fn add_hotel(&self, hotel_id: HotelId, active: bool) -> HotelDirectoryResult<()> {
        let mut state = self.write_state()?;
        state.hotels.insert(
            hotel_id,
            HotelRecord {
                id: hotel_id,
                active,
            },
        );
        Ok(())
    }

    /// Seeds a room for a hotel and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the directory lock is poisoned.
    pub fn add_room(&self, hotel_id: HotelId, number: RoomNumber) -> HotelDirectoryResult<RoomId> {
        let room_id = RoomId::new();
        let mut state = self.write_state()?;
        state.rooms.entry(hotel_id).or_default().push(RoomRecord {
            id: room_id,
            hotel_id,
            number,
        });
        Ok(room_id)
    }

    /// Records a booking checkout for a room on a date.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the directory lock is poisoned.
    pub fn add_checkout(
        &self,
        hotel_id: HotelId,
        room_id: RoomId,
        date: NaiveDate,
    ) -> HotelDirectoryResult<()> {
        let mut state = self.write_state()?;
        state
            .checkouts
            .entry((hotel_id, date))
            .or_default()
            .insert(room_id);
        Ok(())
    }

    fn write_state(
        &self,
    ) -> HotelDirectoryResult<std::sync::RwLockWriteGuard<'_, InMemoryDirectoryState>> {
        self.state.write().map_err(|err| {
            HotelDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn read_state(
        &self,
    ) -> HotelDirectoryResult<std::sync::RwLockReadGuard<'_, InMemoryDirectoryState>> {
        self.state.read().map_err(|err| {
            HotelDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl HotelDirectory for InMemoryHotelDirectory {
    async fn find_hotel(&self, hotel_id: HotelId) -> HotelDirectoryResult<Option<HotelRecord>> {
        let state = self.read_state()?;
        Ok(state.hotels.get(&hotel_id).copied())
    }

    async fn rooms_for_hotel(&self, hotel_id: HotelId) -> HotelDirectoryResult<Vec<RoomRecord>> {
        let state = self.read_state()?;
        Ok(state.rooms.get(&hotel_id).cloned().unwrap_or_default())
    }

    async fn checkouts_on(
        &self,
        hotel_id: HotelId,
        date: NaiveDate,
    ) -> HotelDirectoryResult<HashSet<RoomId>> {
        let state = self.read_state()?;
        Ok(state
            .checkouts
            .get(&(hotel_id, date))
            .cloned()
            .unwrap_or_default())
    }
}
