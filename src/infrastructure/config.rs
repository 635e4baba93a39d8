use crate::domain::catalog::{Catalog, DEFAULT_REJECTION_POINTS, Region, TimeRange};
use crate::error::DashboardError;
use config::{Config, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "LINE_MONITOR";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_time_range: TimeRange,
    #[serde(default = "default_region")]
    pub default_region: String,
    /// Fixed seed for reproducible sessions; time based when absent
    pub seed: Option<u64>,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_rejection_points")]
    pub rejection_points: Vec<String>,
    #[serde(default = "default_regions")]
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegionConfig {
    pub id: String,
    pub machines: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rejection_points: default_rejection_points(),
            regions: default_regions(),
        }
    }
}

impl CatalogConfig {
    pub fn to_catalog(&self) -> Result<Catalog, DashboardError> {
        let regions = self
            .regions
            .iter()
            .map(|r| Region::new(r.id.clone(), r.machines.clone()))
            .collect();
        Catalog::new(self.rejection_points.clone(), regions)
    }
}

fn default_region() -> String {
    "1".to_string()
}

fn default_rejection_points() -> Vec<String> {
    DEFAULT_REJECTION_POINTS.iter().map(|s| s.to_string()).collect()
}

fn default_regions() -> Vec<RegionConfig> {
    Catalog::default()
        .regions()
        .iter()
        .map(|r| RegionConfig {
            id: r.id.clone(),
            machines: r.machines.clone(),
        })
        .collect()
}

/// `config/dashboard.*` (optional) overlaid with `LINE_MONITOR__*` variables.
pub fn load_dashboard_config() -> Result<DashboardConfig, DashboardError> {
    let settings = Config::builder()
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    parse_dashboard_config(settings)
}

pub fn parse_dashboard_config(settings: Config) -> Result<DashboardConfig, DashboardError> {
    Ok(settings.try_deserialize()?)
}
