//! Shared data shapes for the Crewplan scheduling platform.
//!
//! Everything in here is plain data: entities as they live in the store,
//! value types the planner computes with, and the result envelope write
//! actions hand back to the presentation layer.

pub mod action;
pub mod draft;
pub mod employee;
pub mod location;
pub mod schedule;
pub mod shift;
pub mod template;
pub mod tenant;
pub mod week;
