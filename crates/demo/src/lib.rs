//! Demo walkthrough of the inventory model and transaction analytics.

pub mod config;
pub mod showcase;

pub use config::DemoConfig;
