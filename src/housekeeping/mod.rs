//! Housekeeping task lifecycle management for Turndown.
//!
//! This module covers the three operations the roster workflow needs:
//! generating the day's task set for a hotel without duplication, moving
//! tasks along the status transition graph under role-based authorization,
//! and resolving the task subset a requester is entitled to see. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
