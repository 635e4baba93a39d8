// Chart lifecycle - Owns the rendering handles of the dashboard charts
use crate::domain::chart::{ChartName, ChartOption};
use crate::error::DashboardError;
use std::collections::BTreeMap;

/// Maps a well-known container id to a surface the engine can render into.
pub trait ContainerResolver {
    type Target;

    fn resolve(&self, container_id: &str) -> Option<Self::Target>;
}

/// Creates live chart instances on resolved surfaces.
pub trait RenderingEngine {
    type Target;
    type Handle: ChartSurface;

    fn create(
        &mut self,
        chart: ChartName,
        target: Self::Target,
    ) -> Result<Self::Handle, DashboardError>;
}

/// A live chart instance bound to a display surface.
pub trait ChartSurface {
    /// Replace the chart's option wholesale
    fn set_option(&mut self, option: &ChartOption) -> Result<(), DashboardError>;

    fn resize(&mut self);

    fn dispose(&mut self);
}

/// Handles are only ever touched through this manager; they are disposed when
/// it is dropped.
pub struct ChartLifecycleManager<E: RenderingEngine> {
    engine: E,
    handles: BTreeMap<ChartName, E::Handle>,
}

impl<E: RenderingEngine> ChartLifecycleManager<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            handles: BTreeMap::new(),
        }
    }

    /// Mount all four charts. A chart whose container cannot be resolved or
    /// created is reported in the returned error; the others stay mounted.
    pub fn initialize<R>(&mut self, resolver: &R) -> Result<(), DashboardError>
    where
        R: ContainerResolver<Target = E::Target>,
    {
        self.dispose_all();

        let mut failures = Vec::new();
        for chart in ChartName::ALL {
            let container = chart.container_id();
            let Some(target) = resolver.resolve(container) else {
                tracing::warn!("No container `{}` for the {} chart", container, chart);
                failures.push(DashboardError::ContainerNotFound { chart, container });
                continue;
            };

            match self.engine.create(chart, target) {
                Ok(handle) => {
                    self.handles.insert(chart, handle);
                }
                Err(e) => {
                    tracing::warn!("Failed to create the {} chart: {}", chart, e);
                    failures.push(e);
                }
            }
        }

        tracing::info!("Mounted {} of {} charts", self.handles.len(), ChartName::ALL.len());

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::PartialInit(failures))
        }
    }

    /// Silently ignored when the chart is not mounted.
    pub fn apply(&mut self, chart: ChartName, option: &ChartOption) -> Result<(), DashboardError> {
        match self.handles.get_mut(&chart) {
            Some(handle) => handle.set_option(option),
            None => {
                tracing::debug!("Skipping update of unmounted {} chart", chart);
                Ok(())
            }
        }
    }

    pub fn resize_all(&mut self) {
        for handle in self.handles.values_mut() {
            handle.resize();
        }
    }

    pub fn dispose_all(&mut self) {
        if self.handles.is_empty() {
            return;
        }

        let count = self.handles.len();
        for (_, mut handle) in std::mem::take(&mut self.handles) {
            handle.dispose();
        }
        tracing::info!("Disposed {} charts", count);
    }

    pub fn is_mounted(&self, chart: ChartName) -> bool {
        self.handles.contains_key(&chart)
    }

    pub fn mounted(&self) -> impl Iterator<Item = ChartName> + '_ {
        self.handles.keys().copied()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: RenderingEngine> Drop for ChartLifecycleManager<E> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
