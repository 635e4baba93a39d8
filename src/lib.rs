// Production line rejection monitoring: telemetry generation and chart options
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DashboardError;
