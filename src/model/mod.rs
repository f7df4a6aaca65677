//! Data transfer objects returned by the JSON routes.

pub mod api;
pub mod timer;
pub mod universe;
