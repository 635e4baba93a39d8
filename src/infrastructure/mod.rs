// Infrastructure layer - Configuration and rendering adapters
pub mod config;
pub mod json_lines;
