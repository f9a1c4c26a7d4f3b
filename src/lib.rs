pub mod config;
pub mod errors;
pub mod manual;
pub mod resolution;
pub mod types;
