//! HTTP controller endpoints for the structure timer board.
//!
//! Handlers resolve the viewer from the session, call into the services and either
//! render an askama page or return JSON. JSON endpoints carry utoipa annotations and
//! are collected into the OpenAPI document by the router.

pub mod timer;
pub mod timer_form;
pub mod universe;
pub mod util;
