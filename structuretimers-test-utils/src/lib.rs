//! Test utilities for the structure timer board.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the tables and fixtures a
//! test needs, and `build()` returns a [`TestContext`] holding an in-memory SQLite
//! database and a session backed by a memory store. The context exposes fixture
//! helpers (`eve()`, `user()`, `universe()`, `timer()`) for inserting further records
//! while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::timer::{mock_timer, with_creator},
        TestBuilder, TestContext, TestError,
    };
}
