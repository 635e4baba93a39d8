// Trend sample generation for a machine and time range
use crate::application::clock::Clock;
use crate::domain::catalog::TimeRange;
use crate::domain::telemetry::{TimeSeriesPoint, TrendSeries};
use chrono::TimeDelta;
use std::sync::Arc;

/// Samples always span the most recent 24 hours, whatever the range.
const WINDOW_MS: f64 = 24.0 * 3_600_000.0;

#[derive(Clone)]
pub struct TimeSeriesGenerator {
    clock: Arc<dyn Clock>,
}

impl TimeSeriesGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Oldest sample first, the last one anchored at the current time.
    pub fn generate(&self, time_range: TimeRange, machine: &str) -> TrendSeries {
        let now = self.clock.now();
        let count = time_range.sample_count();
        let spacing_ms = WINDOW_MS / count as f64;
        let seed = machine_seed(machine);

        let points = (0..count)
            .map(|i| {
                let offset_ms = ((count - 1 - i) as f64 * spacing_ms) as i64;
                let instant = now - TimeDelta::milliseconds(offset_ms);
                let label = self
                    .clock
                    .local(instant)
                    .format(time_range.label_format())
                    .to_string();
                TimeSeriesPoint::new(label, sample_value(seed, i))
            })
            .collect();

        tracing::debug!(
            "Generated {} trend samples for {} ({})",
            count,
            machine,
            time_range
        );

        TrendSeries { time_range, points }
    }
}

/// Sum of the first two UTF-16 code units of the machine id.
///
/// Missing code units count as zero, so one-character ids still get a seed.
pub fn machine_seed(machine: &str) -> u32 {
    machine.encode_utf16().take(2).map(u32::from).sum()
}

/// Amplitude pattern in [500, 1500).
pub fn sample_value(seed: u32, index: usize) -> u32 {
    let phase = f64::from(seed) + index as f64;
    (phase.sin().abs() * 1000.0 + 500.0).floor() as u32
}
