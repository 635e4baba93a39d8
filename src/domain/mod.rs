// Domain layer - Catalog, telemetry snapshots and chart option model
pub mod catalog;
pub mod chart;
pub mod telemetry;
