mod create_template;
mod get_template;
mod list_templates;
mod remove_template;
mod set_default_template;

pub use create_template::create_template;
pub use get_template::get_template;
pub use list_templates::list_templates;
pub use remove_template::remove_template;
pub use set_default_template::set_default_template;
