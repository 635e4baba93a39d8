use crate::domain::chart::ChartName;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown machine: {0}")]
    UnknownMachine(String),

    #[error("no container `{container}` for the {chart} chart")]
    ContainerNotFound {
        chart: ChartName,
        container: &'static str,
    },

    #[error("failed to render the {chart} chart: {reason}")]
    Render { chart: ChartName, reason: String },

    #[error("{} chart(s) failed to initialize", .0.len())]
    PartialInit(Vec<DashboardError>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// Charts named by this error, including every nested init failure.
    pub fn failed_charts(&self) -> Vec<ChartName> {
        match self {
            DashboardError::ContainerNotFound { chart, .. }
            | DashboardError::Render { chart, .. } => vec![*chart],
            DashboardError::PartialInit(errors) => {
                errors.iter().flat_map(|e| e.failed_charts()).collect()
            }
            _ => Vec::new(),
        }
    }
}
