//! Session data models.
//!
//! Type-safe wrappers around the values this service reads from and writes to the
//! shared session store.

pub mod csrf;
pub mod user;
