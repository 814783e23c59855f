#![deny(missing_docs)]

//! Weekly planner board domain for the Crewplan scheduling platform.
//!
//! The planner turns a location's roster, a planning template's opening
//! windows and the stored shifts into the board the scheduling screen
//! renders, and owns the draft lifecycle around that board. `domain` holds
//! the models, storage contracts and the service; `outbound` holds the
//! SQLite-backed stores.

pub mod domain;
pub mod outbound;
