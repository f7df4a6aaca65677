//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and a memory session,
//! covering the visibility rules of the timer board, the form flows and the
//! autocomplete endpoints.

mod timer;
mod timer_form;

use structuretimers::server::model::permission::Permission;
use structuretimers_test_utils::prelude::*;

use crate::util::{body_json, body_text, log_in};

/// Permissions of a regular timer board user
const MEMBER: &[Permission] = &[Permission::BasicAccess, Permission::CreateTimer];
