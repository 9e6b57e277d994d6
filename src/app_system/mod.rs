//! Demo orchestration, configuration and logging setup.

pub mod config;
pub mod inventory_system;
pub mod telemetry;

pub use config::*;
pub use inventory_system::*;
pub use telemetry::*;
