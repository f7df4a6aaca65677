//! EVE Online entity repositories.

pub mod character;
