// Static catalog: rejection points, region topology and time ranges
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Rejection points tracked on every production line, in display order.
pub const DEFAULT_REJECTION_POINTS: [&str; 16] = [
    "Tipping paper joint",
    "Tipping paper splice",
    "Missing glue",
    "ORIS",
    "Draw resistance",
    "Forming defect",
    "Missing tip",
    "Loose end",
    "Ventilation",
    "Air leak",
    "SRM",
    "Light end",
    "Hard spot",
    "Soft spot",
    "Overweight",
    "Underweight",
];

/// Observation window selectable on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1")]
    OneHour,
    #[serde(rename = "4")]
    FourHours,
    #[serde(rename = "24")]
    OneDay,
    #[serde(rename = "168")]
    SevenDays,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneHour,
        TimeRange::FourHours,
        TimeRange::OneDay,
        TimeRange::SevenDays,
    ];

    /// Parse an hour key ("1", "4", "24", "168").
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(TimeRange::OneHour),
            "4" => Some(TimeRange::FourHours),
            "24" => Some(TimeRange::OneDay),
            "168" => Some(TimeRange::SevenDays),
            _ => None,
        }
    }

    /// Unknown keys fall back to the one hour window.
    pub fn parse_or_default(key: &str) -> Self {
        Self::parse(key).unwrap_or_else(|| {
            tracing::debug!("Unknown time range {:?}, falling back to 1h", key);
            TimeRange::default()
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::OneHour => "1",
            TimeRange::FourHours => "4",
            TimeRange::OneDay => "24",
            TimeRange::SevenDays => "168",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneHour => "1 hour",
            TimeRange::FourHours => "4 hours",
            TimeRange::OneDay => "24 hours",
            TimeRange::SevenDays => "7 days",
        }
    }

    pub fn sample_count(&self) -> usize {
        match self {
            TimeRange::OneHour => 12,
            TimeRange::FourHours => 24,
            TimeRange::OneDay => 24,
            TimeRange::SevenDays => 28,
        }
    }

    /// chrono format string for sample labels
    pub fn label_format(&self) -> &'static str {
        match self {
            TimeRange::OneHour | TimeRange::FourHours => "%H:%M",
            TimeRange::OneDay => "%H:00",
            TimeRange::SevenDays => "%-m/%-d %H:00",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub machines: Vec<String>,
}

impl Region {
    pub fn new(id: impl Into<String>, machines: Vec<String>) -> Self {
        Self {
            id: id.into(),
            machines,
        }
    }
}

/// Rejection points and the region to machine topology.
///
/// Built once and shared read-only by the generators and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rejection_points: Vec<String>,
    regions: Vec<Region>,
}

impl Catalog {
    pub fn new(
        rejection_points: Vec<String>,
        regions: Vec<Region>,
    ) -> Result<Self, DashboardError> {
        if rejection_points.is_empty() {
            return Err(DashboardError::InvalidCatalog(
                "at least one rejection point is required".to_string(),
            ));
        }

        let mut seen_points = HashSet::new();
        for point in &rejection_points {
            if !seen_points.insert(point.as_str()) {
                return Err(DashboardError::InvalidCatalog(format!(
                    "duplicate rejection point `{}`",
                    point
                )));
            }
        }

        if regions.is_empty() {
            return Err(DashboardError::InvalidCatalog(
                "at least one region is required".to_string(),
            ));
        }

        let mut seen_machines = HashSet::new();
        for region in &regions {
            if region.machines.is_empty() {
                return Err(DashboardError::InvalidCatalog(format!(
                    "region `{}` has no machines",
                    region.id
                )));
            }
            for machine in &region.machines {
                if machine.is_empty() {
                    return Err(DashboardError::InvalidCatalog(format!(
                        "region `{}` lists an empty machine id",
                        region.id
                    )));
                }
                if !seen_machines.insert(machine.as_str()) {
                    return Err(DashboardError::InvalidCatalog(format!(
                        "machine `{}` belongs to more than one region",
                        machine
                    )));
                }
            }
        }

        Ok(Self {
            rejection_points,
            regions,
        })
    }

    pub fn rejection_points(&self) -> &[String] {
        &self.rejection_points
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Every machine across all regions, region order first.
    pub fn all_machines(&self) -> impl Iterator<Item = &str> {
        self.regions
            .iter()
            .flat_map(|r| r.machines.iter().map(String::as_str))
    }

    pub fn machines(&self, region_id: &str) -> Option<&[String]> {
        self.regions
            .iter()
            .find(|r| r.id == region_id)
            .map(|r| r.machines.as_slice())
    }

    /// Machine selected when switching to a region.
    pub fn default_machine(&self, region_id: &str) -> Option<&str> {
        self.machines(region_id)
            .and_then(|m| m.first())
            .map(String::as_str)
    }

    pub fn region_of(&self, machine: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|r| r.machines.iter().any(|m| m == machine))
    }

    pub fn contains_machine(&self, machine: &str) -> bool {
        self.region_of(machine).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let machines = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect();
        Self {
            rejection_points: DEFAULT_REJECTION_POINTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            regions: vec![
                Region::new("1", machines(&["J11", "J12"])),
                Region::new("2", machines(&["J63", "J64", "J65", "J66", "J67"])),
            ],
        }
    }
}
