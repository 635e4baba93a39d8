// Renderer-agnostic chart option model
//
// Template strings in formatters use `{b}` for the category name, `{c}` for the
// data value, `{d}` for the percentage share and `{value}` for axis ticks.
use super::telemetry::NamedValue;
use serde::Serialize;
use std::fmt;

/// The four charts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartName {
    Trend,
    Rate,
    Distribution,
    Status,
}

impl ChartName {
    pub const ALL: [ChartName; 4] = [
        ChartName::Trend,
        ChartName::Rate,
        ChartName::Distribution,
        ChartName::Status,
    ];

    /// Well-known identifier of the container the chart is mounted into.
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartName::Trend => "trend-chart",
            ChartName::Rate => "rate-chart",
            ChartName::Distribution => "distribution-chart",
            ChartName::Status => "status-chart",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartName::Trend => "trend",
            ChartName::Rate => "rate",
            ChartName::Distribution => "distribution",
            ChartName::Status => "status",
        }
    }
}

impl fmt::Display for ChartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub tooltip: Tooltip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y_axis: Vec<Axis>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: TooltipTrigger,
    /// Highlight the whole category band under the pointer
    pub shadow_pointer: bool,
}

impl Tooltip {
    pub fn axis() -> Self {
        Self {
            trigger: TooltipTrigger::Axis,
            shadow_pointer: true,
        }
    }

    pub fn item() -> Self {
        Self {
            trigger: TooltipTrigger::Item,
            shadow_pointer: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPlacement {
    Top,
    RightCenter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    /// Empty means every series/slice is listed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<String>,
    pub placement: LegendPlacement,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub left_pct: f64,
    pub right_pct: f64,
    pub bottom_pct: f64,
    pub contain_label: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            left_pct: 3.0,
            right_pct: 4.0,
            bottom_pct: 3.0,
            contain_label: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_deg: Option<i32>,
    /// Render every category label instead of letting the renderer thin them out
    pub show_all: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub kind: AxisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    pub line_color: String,
    pub label: AxisLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fill {
    Solid { color: String },
    VerticalGradient { top: String, bottom: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Top,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLabel {
    pub show: bool,
    pub position: LabelPosition,
    pub color: String,
    pub font_size: u32,
    pub formatter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Bar(BarSeries),
    Line(LineSeries),
    Pie(PieSeries),
    Gauge(GaugeSeries),
}

impl Series {
    pub fn name(&self) -> &str {
        match self {
            Series::Bar(s) => &s.name,
            Series::Line(s) => &s.name,
            Series::Pie(s) => &s.name,
            Series::Gauge(s) => &s.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub name: String,
    pub y_axis_index: usize,
    pub data: Vec<f64>,
    pub fill: Fill,
    pub label: DataLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: String,
    pub y_axis_index: usize,
    pub data: Vec<f64>,
    pub color: String,
    pub width: f64,
    pub label: DataLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    pub name: String,
    /// Ring chart when the inner radius is non-zero
    pub inner_radius_pct: f64,
    pub outer_radius_pct: f64,
    pub avoid_label_overlap: bool,
    pub border_radius: f64,
    pub border_color: String,
    pub border_width: f64,
    pub label: DataLabel,
    pub emphasis_label: EmphasisLabel,
    pub show_label_line: bool,
    pub data: Vec<NamedValue<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmphasisLabel {
    pub font_size: u32,
    pub bold: bool,
    pub color: String,
}

/// Colors the gauge arc up to `upto` (fraction of the full scale).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBand {
    pub upto: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugePointer {
    pub length_pct: f64,
    pub width: f64,
    pub offset_y_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeAxisLabel {
    pub color: String,
    pub font_size: u32,
    pub distance: f64,
    /// Only these tick values are labeled
    pub marked_values: Vec<u32>,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeDetail {
    pub font_size: u32,
    pub offset_y_pct: f64,
    pub value_animation: bool,
    pub formatter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeSeries {
    pub name: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub min: f64,
    pub max: f64,
    pub split_number: u32,
    pub arc_width: f64,
    pub bands: Vec<ColorBand>,
    pub pointer: GaugePointer,
    pub axis_label: GaugeAxisLabel,
    pub title_color: String,
    pub detail: GaugeDetail,
    pub value: f64,
}
