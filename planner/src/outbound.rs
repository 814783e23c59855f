//! SQLite-backed implementations of the planner's storage contracts.

pub mod draft_repo;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod shift_repo;
