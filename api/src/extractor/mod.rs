mod json;
mod query;
mod valid;

pub use json::Json;
pub use query::{Path, Query};
pub use valid::Valid;
