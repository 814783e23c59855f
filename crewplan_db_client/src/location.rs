mod create_location;
mod get_location;
mod list_locations;
mod patch_location;
mod remove_location;

pub use create_location::create_location;
pub use get_location::get_location;
pub use list_locations::list_locations;
pub use patch_location::patch_location;
pub use remove_location::remove_location;
