mod create_employee;
mod list_employees_for_location;
mod remove_employee;

pub use create_employee::create_employee;
pub use list_employees_for_location::list_employees_for_location;
pub use remove_employee::remove_employee;
