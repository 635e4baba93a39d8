// Dashboard service - Use cases driving data regeneration and chart updates
use crate::application::chart_lifecycle::{
    ChartLifecycleManager, ContainerResolver, RenderingEngine,
};
use crate::application::chart_options::{
    build_comparison_option, build_distribution_option, build_status_option, build_trend_option,
    ChartTheme,
};
use crate::application::device_store::DeviceDataStore;
use crate::domain::catalog::TimeRange;
use crate::domain::chart::ChartName;
use crate::domain::telemetry::DeviceSnapshot;
use crate::error::DashboardError;

/// Runs one selection change at a time: regenerate, build options, apply.
///
/// Callers serialize their own triggers; nothing here queues or debounces.
pub struct DashboardService<E: RenderingEngine> {
    store: DeviceDataStore,
    charts: ChartLifecycleManager<E>,
    theme: ChartTheme,
}

impl<E: RenderingEngine> DashboardService<E> {
    pub fn new(store: DeviceDataStore, engine: E, theme: ChartTheme) -> Self {
        Self {
            store,
            charts: ChartLifecycleManager::new(engine),
            theme,
        }
    }

    /// Mount the charts and generate data for every machine.
    ///
    /// A chart that fails to mount is reported but does not stop the data
    /// from being generated.
    pub fn start<R>(&mut self, resolver: &R, time_range: TimeRange) -> Result<(), DashboardError>
    where
        R: ContainerResolver<Target = E::Target>,
    {
        let mounted = self.charts.initialize(resolver);
        self.store.initialize_all(time_range);
        mounted
    }

    /// Push the stored snapshot of `machine` to all four charts.
    pub fn render_machine(&mut self, machine: &str) -> Result<(), DashboardError> {
        let snapshot = self
            .store
            .get(machine)
            .ok_or_else(|| DashboardError::UnknownMachine(machine.to_string()))?;

        let theme = &self.theme;
        let options = [
            (ChartName::Trend, build_trend_option(theme, &snapshot.trend_series)),
            (
                ChartName::Rate,
                build_comparison_option(theme, &snapshot.rate_series, machine),
            ),
            (
                ChartName::Distribution,
                build_distribution_option(theme, &snapshot.distribution_series),
            ),
            (ChartName::Status, build_status_option(theme, snapshot.status_value)),
        ];

        for (chart, option) in &options {
            self.charts.apply(*chart, option)?;
        }

        tracing::debug!("Rendered {} on {} charts", machine, options.len());
        Ok(())
    }

    /// Machine selection: fresh snapshot for that machine only.
    pub fn select_machine(
        &mut self,
        machine: &str,
        time_range: TimeRange,
    ) -> Result<(), DashboardError> {
        self.store.regenerate(machine, time_range)?;
        self.render_machine(machine)
    }

    /// Global range switch: only the trend data of every machine changes.
    pub fn switch_time_range(
        &mut self,
        time_range: TimeRange,
        machine: &str,
    ) -> Result<(), DashboardError> {
        tracing::info!("Switching time range to {}", time_range);
        self.store.refresh_trend_only(time_range);

        let snapshot = self
            .store
            .get(machine)
            .ok_or_else(|| DashboardError::UnknownMachine(machine.to_string()))?;
        let option = build_trend_option(&self.theme, &snapshot.trend_series);
        self.charts.apply(ChartName::Trend, &option)
    }

    pub fn snapshot(&self, machine: &str) -> Option<&DeviceSnapshot> {
        self.store.get(machine)
    }

    pub fn resize(&mut self) {
        self.charts.resize_all();
    }

    pub fn shutdown(&mut self) {
        self.charts.dispose_all();
    }

    pub fn charts(&self) -> &ChartLifecycleManager<E> {
        &self.charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_lifecycle::testing::{Event, MapResolver, RecordingEngine};
    use crate::application::chart_options::DEFAULT_THEME;
    use crate::application::clock::FixedClock;
    use crate::application::snapshot_builder::DeviceSnapshotBuilder;
    use crate::application::time_series::TimeSeriesGenerator;
    use crate::domain::catalog::Catalog;
    use crate::domain::chart::Series;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn service() -> DashboardService<RecordingEngine> {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let builder = DeviceSnapshotBuilder::new(
            Arc::new(Catalog::default()),
            TimeSeriesGenerator::new(Arc::new(FixedClock::utc(now))),
            StdRng::seed_from_u64(5),
        );
        DashboardService::new(
            DeviceDataStore::new(builder),
            RecordingEngine::default(),
            DEFAULT_THEME,
        )
    }

    fn applied(service: &DashboardService<RecordingEngine>) -> Vec<Event> {
        service
            .charts()
            .engine()
            .events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Applied(..)))
            .cloned()
            .collect()
    }

    #[test]
    fn test_render_machine_updates_all_charts() {
        let mut service = service();
        service.start(&MapResolver::all(), TimeRange::OneHour).unwrap();
        service.render_machine("J11").unwrap();

        let charts: Vec<_> = applied(&service)
            .into_iter()
            .map(|e| match e {
                Event::Applied(chart, _) => chart,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(charts, ChartName::ALL.to_vec());
    }

    #[test]
    fn test_render_unknown_machine_fails() {
        let mut service = service();
        service.start(&MapResolver::all(), TimeRange::OneHour).unwrap();
        assert!(matches!(
            service.render_machine("Q1"),
            Err(DashboardError::UnknownMachine(_))
        ));
    }

    #[test]
    fn test_switch_to_seven_days_keeps_status() {
        let mut service = service();
        service.start(&MapResolver::all(), TimeRange::OneHour).unwrap();
        let statuses: Vec<u32> = Catalog::default()
            .all_machines()
            .map(|m| service.snapshot(m).unwrap().status_value)
            .collect();

        service.switch_time_range(TimeRange::SevenDays, "J11").unwrap();

        for (machine, status) in Catalog::default().all_machines().zip(statuses) {
            let snapshot = service.snapshot(machine).unwrap();
            assert_eq!(snapshot.trend_series.points.len(), 28);
            assert_eq!(snapshot.trend_series.points[27].label, "6/1 12:00");
            assert_eq!(snapshot.status_value, status);
        }

        let events = applied(&service);
        assert_eq!(events.len(), 1);
        let Event::Applied(ChartName::Trend, option) = &events[0] else {
            panic!("expected a trend update, got {:?}", events[0]);
        };
        let Series::Bar(bar) = &option.series[0] else {
            panic!("expected bar series");
        };
        assert_eq!(bar.data.len(), 28);
    }

    #[test]
    fn test_start_with_missing_container_still_generates_data() {
        let mut service = service();
        let resolver = MapResolver::all().without("status-chart");
        let result = service.start(&resolver, TimeRange::FourHours);

        assert!(result.is_err());
        assert!(service.snapshot("J67").is_some());
        service.render_machine("J67").unwrap();
        assert_eq!(applied(&service).len(), 3);
    }

    #[test]
    fn test_shutdown_twice() {
        let mut service = service();
        service.start(&MapResolver::all(), TimeRange::OneDay).unwrap();
        service.shutdown();
        service.shutdown();
        assert_eq!(service.charts().mounted().count(), 0);
        service.render_machine("J12").unwrap();
        assert!(applied(&service).is_empty());
    }
}
