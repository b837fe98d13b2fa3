//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory email senders that record or fail deliveries
//! - A builder for `AppState` wired with those mocks

mod app_state_builder;
mod email_mocks;
mod factories;

pub use app_state_builder::*;
pub use email_mocks::*;
pub use factories::*;
