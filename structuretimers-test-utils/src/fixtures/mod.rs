//! Fixtures for inserting records while a test runs.
//!
//! - `eve` - alliances, corporations and characters
//! - `user` - users and their permissions
//! - `universe` - solar systems and item types
//! - `timer` - structure timers and the `mock_timer` factory

pub mod eve;
pub mod timer;
pub mod universe;
pub mod user;
