//! Adapter implementations of the housekeeping ports.

pub mod memory;
pub mod postgres;
