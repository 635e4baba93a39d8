// Application layer - Generation, storage, chart options and chart lifecycle
pub mod chart_lifecycle;
pub mod chart_options;
pub mod clock;
pub mod dashboard_service;
pub mod device_store;
pub mod snapshot_builder;
pub mod time_series;
