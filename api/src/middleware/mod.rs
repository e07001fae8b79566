pub mod admin;
pub mod identity;
