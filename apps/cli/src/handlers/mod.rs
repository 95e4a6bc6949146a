pub mod blueprint;
pub mod config;
