// Device data store - Current snapshot per machine
use crate::application::snapshot_builder::DeviceSnapshotBuilder;
use crate::domain::catalog::TimeRange;
use crate::domain::telemetry::DeviceSnapshot;
use crate::error::DashboardError;
use std::collections::HashMap;

pub struct DeviceDataStore {
    builder: DeviceSnapshotBuilder,
    snapshots: HashMap<String, DeviceSnapshot>,
}

impl DeviceDataStore {
    pub fn new(builder: DeviceSnapshotBuilder) -> Self {
        Self {
            builder,
            snapshots: HashMap::new(),
        }
    }

    /// Regenerate every catalog machine from scratch.
    pub fn initialize_all(&mut self, time_range: TimeRange) {
        let machines: Vec<String> = self
            .builder
            .catalog()
            .all_machines()
            .map(str::to_string)
            .collect();

        for machine in machines {
            let snapshot = self.builder.build(&machine, time_range);
            self.snapshots.insert(machine, snapshot);
        }

        tracing::info!(
            "Initialized {} machine snapshots ({})",
            self.snapshots.len(),
            time_range
        );
    }

    /// Swap in fresh trend samples, leaving rates, distribution, status and
    /// summary as they were.
    pub fn refresh_trend_only(&mut self, time_range: TimeRange) {
        let generator = self.builder.generator();
        for (machine, snapshot) in self.snapshots.iter_mut() {
            snapshot.trend_series = generator.generate(time_range, machine);
        }

        tracing::info!(
            "Refreshed trend data for {} machines ({})",
            self.snapshots.len(),
            time_range
        );
    }

    /// Full regeneration of a single catalog machine.
    pub fn regenerate(
        &mut self,
        machine: &str,
        time_range: TimeRange,
    ) -> Result<&DeviceSnapshot, DashboardError> {
        if !self.builder.catalog().contains_machine(machine) {
            return Err(DashboardError::UnknownMachine(machine.to_string()));
        }

        let snapshot = self.builder.build(machine, time_range);
        Ok(self
            .snapshots
            .entry(machine.to_string())
            .insert_entry(snapshot)
            .into_mut())
    }

    pub fn get(&self, machine: &str) -> Option<&DeviceSnapshot> {
        self.snapshots.get(machine)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::FixedClock;
    use crate::application::time_series::TimeSeriesGenerator;
    use crate::domain::catalog::Catalog;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn store() -> DeviceDataStore {
        let now = NaiveDate::from_ymd_opt(2024, 11, 20)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        let builder = DeviceSnapshotBuilder::new(
            Arc::new(Catalog::default()),
            TimeSeriesGenerator::new(Arc::new(FixedClock::utc(now))),
            StdRng::seed_from_u64(11),
        );
        DeviceDataStore::new(builder)
    }

    #[test]
    fn test_get_before_initialization_is_absent() {
        let store = store();
        assert!(store.is_empty());
        assert!(store.get("J11").is_none());
    }

    #[test]
    fn test_initialize_all_covers_every_machine() {
        let mut store = store();
        for range in TimeRange::ALL {
            store.initialize_all(range);
            assert_eq!(store.len(), 7);
            for machine in Catalog::default().all_machines() {
                let snapshot = store.get(machine).unwrap();
                assert_eq!(snapshot.trend_series.points.len(), range.sample_count());
                assert_eq!(snapshot.rate_series.len(), 16);
                assert_eq!(snapshot.distribution_series.len(), 16);
                assert!((70..100).contains(&snapshot.status_value));
            }
        }
        assert!(store.get("J99").is_none());
    }

    #[test]
    fn test_refresh_trend_only_keeps_other_fields() {
        let mut store = store();
        store.initialize_all(TimeRange::OneHour);
        let before: HashMap<String, DeviceSnapshot> = Catalog::default()
            .all_machines()
            .map(|m| (m.to_string(), store.get(m).unwrap().clone()))
            .collect();

        store.refresh_trend_only(TimeRange::SevenDays);

        for (machine, old) in &before {
            let new = store.get(machine).unwrap();
            assert_eq!(new.trend_series.time_range, TimeRange::SevenDays);
            assert_eq!(new.trend_series.points.len(), 28);
            assert!(
                new.trend_series
                    .labels()
                    .all(|l| l.contains('/') && l.ends_with(":00"))
            );
            assert_eq!(new.rate_series, old.rate_series);
            assert_eq!(new.distribution_series, old.distribution_series);
            assert_eq!(new.status_value, old.status_value);
            assert_eq!(new.summary, old.summary);
        }
    }

    #[test]
    fn test_refresh_on_empty_store_is_noop() {
        let mut store = store();
        store.refresh_trend_only(TimeRange::OneDay);
        assert!(store.is_empty());
    }

    #[test]
    fn test_regenerate_replaces_one_machine() {
        let mut store = store();
        store.initialize_all(TimeRange::OneHour);
        let untouched = store.get("J12").unwrap().clone();

        let snapshot = store.regenerate("J11", TimeRange::FourHours).unwrap().clone();
        assert_eq!(snapshot.trend_series.points.len(), 24);
        assert_eq!(store.get("J11"), Some(&snapshot));
        assert_eq!(store.get("J12"), Some(&untouched));

        assert!(matches!(
            store.regenerate("X1", TimeRange::OneHour),
            Err(DashboardError::UnknownMachine(_))
        ));
    }
}
