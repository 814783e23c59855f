//! Board models, storage contracts and the planner service.

pub mod board;
pub mod draft_repo;
pub mod model;
pub mod planner_service;
pub mod shift_repo;
