pub mod config;
pub mod location;
