// Snapshot builder - Assembles the full telemetry snapshot for one machine
use crate::application::time_series::TimeSeriesGenerator;
use crate::domain::catalog::{Catalog, TimeRange};
use crate::domain::telemetry::{round2, DeviceSnapshot, NamedValue, Summary};
use rand::Rng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Fields other than the trend are sampled independently of each other.
pub struct DeviceSnapshotBuilder {
    catalog: Arc<Catalog>,
    generator: TimeSeriesGenerator,
    rng: StdRng,
}

impl DeviceSnapshotBuilder {
    pub fn new(catalog: Arc<Catalog>, generator: TimeSeriesGenerator, rng: StdRng) -> Self {
        Self {
            catalog,
            generator,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generator(&self) -> &TimeSeriesGenerator {
        &self.generator
    }

    pub fn build(&mut self, machine: &str, time_range: TimeRange) -> DeviceSnapshot {
        let trend_series = self.generator.generate(time_range, machine);

        let rate_series: Vec<NamedValue<f64>> = self
            .catalog
            .rejection_points()
            .iter()
            .map(|point| NamedValue::new(point.clone(), round2(self.rng.random_range(0.0..2.0))))
            .collect();

        let distribution_series: Vec<NamedValue<u32>> = self
            .catalog
            .rejection_points()
            .iter()
            .map(|point| NamedValue::new(point.clone(), self.rng.random_range(100..400)))
            .collect();

        let status_value: u32 = self.rng.random_range(70..100);

        let summary = Summary {
            total_rate: round2(self.rng.random_range(1.0..4.0)),
            total_rejection_count: self.rng.random_range(10_000..15_000),
            avg_slope: round2(self.rng.random_range(0.0..0.5)),
        };

        tracing::debug!(
            "Built snapshot for {} ({}): status={}",
            machine,
            time_range,
            status_value
        );

        DeviceSnapshot {
            trend_series,
            rate_series,
            distribution_series,
            status_value,
            summary,
        }
    }
}
