mod get_tenant_for_user;

pub use get_tenant_for_user::get_tenant_for_user;

#[cfg(test)]
mod test;
