// Telemetry data domain models
use super::catalog::TimeRange;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: u32,
}

impl TimeSeriesPoint {
    pub fn new(label: String, value: u32) -> Self {
        Self { label, value }
    }
}

/// Trend samples together with the range they were generated for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub time_range: TimeRange,
    pub points: Vec<TimeSeriesPoint>,
}

impl TrendSeries {
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }
}

/// One value per rejection point, kept in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue<T> {
    pub name: String,
    pub value: T,
}

impl<T> NamedValue<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_rate: f64,
    pub total_rejection_count: u32,
    pub avg_slope: f64,
}

impl Summary {
    /// Total rejections with thousands separators, e.g. "12,458".
    pub fn formatted_total_rejections(&self) -> String {
        let digits = self.total_rejection_count.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub trend_series: TrendSeries,
    /// Rejection rate in percent per rejection point
    pub rate_series: Vec<NamedValue<f64>>,
    /// Rejection count per rejection point
    pub distribution_series: Vec<NamedValue<u32>>,
    pub status_value: u32,
    pub summary: Summary,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
