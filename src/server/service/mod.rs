//! Service layer for business logic.
//!
//! Services combine repositories into the operations controllers and the scheduler call:
//! resolving the request's viewer, timer listing and editing under the visibility rules,
//! and universe catalog lookups.

pub mod timer;
pub mod universe;
pub mod viewer;
