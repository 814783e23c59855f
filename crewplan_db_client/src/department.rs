mod create_department;
mod list_departments;
mod remove_department;

pub use create_department::create_department;
pub use list_departments::list_departments;
pub use remove_department::remove_department;
