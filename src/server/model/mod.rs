//! Server application models and type definitions.
//!
//! Application state, database model aliases, the request's [`viewer::Viewer`],
//! permission names, session wrappers, and the timer form with its validation.

pub mod app;
pub mod db;
pub mod form;
pub mod permission;
pub mod session;
pub mod timer;
pub mod viewer;
