// JSON lines rendering engine - Emits every chart lifecycle call as one JSON object per line
use crate::application::chart_lifecycle::{ChartSurface, ContainerResolver, RenderingEngine};
use crate::domain::chart::{ChartName, ChartOption};
use crate::error::DashboardError;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

type SharedWriter = Rc<RefCell<Box<dyn Write>>>;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
enum RenderEvent<'a> {
    Init { chart: ChartName, target: &'a str },
    SetOption { chart: ChartName, option: &'a ChartOption },
    Resize { chart: ChartName },
    Dispose { chart: ChartName },
}

fn emit(writer: &SharedWriter, event: &RenderEvent<'_>) -> Result<(), DashboardError> {
    let mut writer = writer.borrow_mut();
    serde_json::to_writer(&mut *writer, event)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub struct JsonLinesEngine {
    writer: SharedWriter,
}

impl JsonLinesEngine {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer: Rc::new(RefCell::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl RenderingEngine for JsonLinesEngine {
    type Target = String;
    type Handle = JsonLinesSurface;

    fn create(
        &mut self,
        chart: ChartName,
        target: String,
    ) -> Result<JsonLinesSurface, DashboardError> {
        emit(&self.writer, &RenderEvent::Init { chart, target: &target }).map_err(|e| {
            DashboardError::Render {
                chart,
                reason: e.to_string(),
            }
        })?;

        Ok(JsonLinesSurface {
            chart,
            writer: self.writer.clone(),
        })
    }
}

pub struct JsonLinesSurface {
    chart: ChartName,
    writer: SharedWriter,
}

impl ChartSurface for JsonLinesSurface {
    fn set_option(&mut self, option: &ChartOption) -> Result<(), DashboardError> {
        emit(
            &self.writer,
            &RenderEvent::SetOption {
                chart: self.chart,
                option,
            },
        )
    }

    fn resize(&mut self) {
        if let Err(e) = emit(&self.writer, &RenderEvent::Resize { chart: self.chart }) {
            tracing::warn!("Failed to resize the {} chart: {}", self.chart, e);
        }
    }

    fn dispose(&mut self) {
        if let Err(e) = emit(&self.writer, &RenderEvent::Dispose { chart: self.chart }) {
            tracing::warn!("Failed to dispose the {} chart: {}", self.chart, e);
        }
    }
}

/// Fixed container id to target mapping.
#[derive(Debug, Clone, Default)]
pub struct StaticContainerResolver {
    targets: HashMap<String, String>,
}

impl StaticContainerResolver {
    /// Every dashboard container mapped to `#<container id>`.
    pub fn dashboard() -> Self {
        let targets = ChartName::ALL
            .iter()
            .map(|c| (c.container_id().to_string(), format!("#{}", c.container_id())))
            .collect();
        Self { targets }
    }

    pub fn with_target(
        mut self,
        container_id: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.targets.insert(container_id.into(), target.into());
        self
    }
}

impl ContainerResolver for StaticContainerResolver {
    type Target = String;

    fn resolve(&self, container_id: &str) -> Option<String> {
        self.targets.get(container_id).cloned()
    }
}
