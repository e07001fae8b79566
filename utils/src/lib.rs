pub mod db;
pub mod file;
pub mod testing;
