//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table group: EVE characters, users and their
//! permissions, the universe catalog with staging systems, and structure timers.

pub mod eve;
pub mod timer;
pub mod universe;
pub mod user;
