//! Turndown: housekeeping task lifecycle core for a hotel management
//! platform.
//!
//! This crate provides daily housekeeping task generation, the status
//! transition workflow, and role-scoped roster queries, decoupled from any
//! rendering or transport concern.
//!
//! # Architecture
//!
//! Turndown follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`housekeeping`]: Task generation, status transitions, and roster
//!   queries

pub mod housekeeping;
