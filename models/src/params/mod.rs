pub mod matches;
pub mod user;
