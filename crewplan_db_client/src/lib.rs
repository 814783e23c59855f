//! SQL access layer for the Crewplan planning store.
//!
//! One module per entity, one function per operation. Every query is scoped
//! by tenant id; callers pass the id from a resolved
//! [`models_planning::tenant::TenantContext`].

pub mod connect;
pub mod department;
pub mod employee;
pub mod ids;
pub mod location;
pub mod planning_template;
pub mod tenant;
