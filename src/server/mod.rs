//! Server application core modules.
//!
//! HTTP routing, controllers, services, repositories, templates and the housekeeping
//! scheduler of the structure timer board.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod view;
