// Chart option builders - Map snapshot slices to declarative chart options
use crate::domain::chart::{
    Axis, AxisKind, AxisLabel, BarSeries, ChartOption, ColorBand, DataLabel, EmphasisLabel, Fill,
    GaugeAxisLabel, GaugeDetail, GaugePointer, GaugeSeries, Grid, LabelPosition, Legend,
    LegendPlacement, LineSeries, PieSeries, Series, Tooltip,
};
use crate::domain::telemetry::{round2, NamedValue, TrendSeries};

/// Units produced per trend sample, used to turn rejection counts into a rate.
pub const NOMINAL_OUTPUT_PER_SAMPLE: f64 = 50_000.0;

pub const TREND_COUNT_SERIES: &str = "Rejections";
pub const TREND_RATE_SERIES: &str = "Rejection rate";
pub const DISTRIBUTION_SERIES: &str = "Rejection distribution";
pub const STATUS_SERIES: &str = "Efficiency";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    pub primary: &'static str,
    pub dark: &'static str,
    pub text: &'static str,
    pub light_text: &'static str,
    pub axis_line: &'static str,
    pub axis_bg: &'static str,
    pub danger: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub label: &'static str,
    pub slice_border: &'static str,
}

pub const DEFAULT_THEME: ChartTheme = ChartTheme {
    primary: "#3a8ee6",
    dark: "#1a2b4d",
    text: "#e0e0e0",
    light_text: "#a0c0ff",
    axis_line: "#5a7bb4",
    axis_bg: "rgba(90, 123, 180, 0.3)",
    danger: "#ff6b6b",
    warning: "#feca57",
    success: "#3a8ee6",
    label: "#ffffff",
    slice_border: "#0f1c3c",
};

impl Default for ChartTheme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

impl ChartTheme {
    fn bar_fill(&self) -> Fill {
        Fill::VerticalGradient {
            top: self.primary.to_string(),
            bottom: self.dark.to_string(),
        }
    }

    fn category_axis(&self, categories: Vec<String>, rotate_deg: Option<i32>) -> Axis {
        Axis {
            kind: AxisKind::Category,
            name: None,
            categories,
            line_color: self.axis_line.to_string(),
            label: AxisLabel {
                color: self.light_text.to_string(),
                formatter: None,
                rotate_deg,
                show_all: rotate_deg.is_some(),
            },
            split_line_color: None,
        }
    }

    fn value_axis(&self, name: &str, formatter: Option<&str>) -> Axis {
        Axis {
            kind: AxisKind::Value,
            name: Some(name.to_string()),
            categories: Vec::new(),
            line_color: self.axis_line.to_string(),
            label: AxisLabel {
                color: self.light_text.to_string(),
                formatter: formatter.map(str::to_string),
                rotate_deg: None,
                show_all: false,
            },
            split_line_color: Some(self.axis_bg.to_string()),
        }
    }

    fn top_label(&self, color: &str, formatter: &str) -> DataLabel {
        DataLabel {
            show: true,
            position: LabelPosition::Top,
            color: color.to_string(),
            font_size: 10,
            formatter: formatter.to_string(),
        }
    }
}

/// Rejection rate in percent for each trend sample.
pub fn derive_trend_rates(trend: &TrendSeries) -> Vec<f64> {
    trend
        .values()
        .map(|count| round2(f64::from(count) / NOMINAL_OUTPUT_PER_SAMPLE * 100.0))
        .collect()
}

/// Bars for rejection counts with the derived rate on a secondary axis.
pub fn build_trend_option(theme: &ChartTheme, trend: &TrendSeries) -> ChartOption {
    let counts = Series::Bar(BarSeries {
        name: TREND_COUNT_SERIES.to_string(),
        y_axis_index: 0,
        data: trend.values().map(f64::from).collect(),
        fill: theme.bar_fill(),
        label: theme.top_label(theme.label, "{c}"),
    });

    let rates = Series::Line(LineSeries {
        name: TREND_RATE_SERIES.to_string(),
        y_axis_index: 1,
        data: derive_trend_rates(trend),
        color: theme.danger.to_string(),
        width: 3.0,
        label: theme.top_label(theme.danger, "{c}%"),
    });

    ChartOption {
        tooltip: Tooltip::axis(),
        legend: Some(Legend {
            entries: vec![TREND_COUNT_SERIES.to_string(), TREND_RATE_SERIES.to_string()],
            placement: LegendPlacement::Top,
            text_color: theme.text.to_string(),
        }),
        grid: Some(Grid::default()),
        x_axis: Some(theme.category_axis(trend.labels().map(str::to_string).collect(), None)),
        y_axis: vec![
            theme.value_axis(TREND_COUNT_SERIES, None),
            theme.value_axis("Rejection rate (%)", Some("{value}%")),
        ],
        series: vec![counts, rates],
    }
}

/// Rejection rate per rejection point for one machine.
pub fn build_comparison_option(
    theme: &ChartTheme,
    rates: &[NamedValue<f64>],
    machine_label: &str,
) -> ChartOption {
    let categories = rates.iter().map(|p| p.name.clone()).collect();

    ChartOption {
        tooltip: Tooltip::axis(),
        legend: None,
        grid: Some(Grid::default()),
        x_axis: Some(theme.category_axis(categories, Some(30))),
        y_axis: vec![theme.value_axis("Rejection rate (%)", Some("{value}%"))],
        series: vec![Series::Bar(BarSeries {
            name: machine_label.to_string(),
            y_axis_index: 0,
            data: rates.iter().map(|p| p.value).collect(),
            fill: theme.bar_fill(),
            label: theme.top_label(theme.label, "{c}%"),
        })],
    }
}

/// Ring chart of rejection counts, one slice per rejection point.
pub fn build_distribution_option(
    theme: &ChartTheme,
    distribution: &[NamedValue<u32>],
) -> ChartOption {
    let data = distribution
        .iter()
        .map(|p| NamedValue::new(p.name.clone(), f64::from(p.value)))
        .collect();

    ChartOption {
        tooltip: Tooltip::item(),
        legend: Some(Legend {
            entries: Vec::new(),
            placement: LegendPlacement::RightCenter,
            text_color: theme.text.to_string(),
        }),
        grid: None,
        x_axis: None,
        y_axis: Vec::new(),
        series: vec![Series::Pie(PieSeries {
            name: DISTRIBUTION_SERIES.to_string(),
            inner_radius_pct: 40.0,
            outer_radius_pct: 70.0,
            avoid_label_overlap: false,
            border_radius: 10.0,
            border_color: theme.slice_border.to_string(),
            border_width: 2.0,
            label: DataLabel {
                show: true,
                position: LabelPosition::Outside,
                color: theme.text.to_string(),
                font_size: 12,
                formatter: "{b}: {c} ({d}%)".to_string(),
            },
            emphasis_label: EmphasisLabel {
                font_size: 18,
                bold: true,
                color: theme.label.to_string(),
            },
            show_label_line: true,
            data,
        })],
    }
}

/// Half-circle efficiency gauge over 0..=100.
pub fn build_status_option(theme: &ChartTheme, status_value: u32) -> ChartOption {
    ChartOption {
        tooltip: Tooltip::item(),
        legend: None,
        grid: None,
        x_axis: None,
        y_axis: Vec::new(),
        series: vec![Series::Gauge(GaugeSeries {
            name: STATUS_SERIES.to_string(),
            start_angle: 180.0,
            end_angle: 0.0,
            min: 0.0,
            max: 100.0,
            split_number: 10,
            arc_width: 10.0,
            bands: vec![
                ColorBand {
                    upto: 0.3,
                    color: theme.danger.to_string(),
                },
                ColorBand {
                    upto: 0.7,
                    color: theme.warning.to_string(),
                },
                ColorBand {
                    upto: 1.0,
                    color: theme.success.to_string(),
                },
            ],
            pointer: GaugePointer {
                length_pct: 12.0,
                width: 10.0,
                offset_y_pct: -60.0,
            },
            axis_label: GaugeAxisLabel {
                color: theme.light_text.to_string(),
                font_size: 12,
                distance: -40.0,
                marked_values: vec![0, 50, 100],
                suffix: "%".to_string(),
            },
            title_color: theme.light_text.to_string(),
            detail: GaugeDetail {
                font_size: 24,
                offset_y_pct: 0.0,
                value_animation: true,
                formatter: "{value}%".to_string(),
            },
            value: f64::from(status_value),
        })],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::TimeRange;
    use crate::domain::telemetry::TimeSeriesPoint;

    fn trend() -> TrendSeries {
        TrendSeries {
            time_range: TimeRange::OneHour,
            points: vec![
                TimeSeriesPoint::new("08:00".to_string(), 500),
                TimeSeriesPoint::new("10:00".to_string(), 1499),
                TimeSeriesPoint::new("12:00".to_string(), 1000),
            ],
        }
    }

    #[test]
    fn test_trend_option_is_dual_axis() {
        let input = trend();
        let snapshot = input.clone();
        let option = build_trend_option(&DEFAULT_THEME, &input);

        assert_eq!(input, snapshot);
        assert_eq!(option.y_axis.len(), 2);
        assert_eq!(
            option.x_axis.as_ref().map(|a| a.categories.clone()),
            Some(vec!["08:00".to_string(), "10:00".to_string(), "12:00".to_string()])
        );
        match (&option.series[0], &option.series[1]) {
            (Series::Bar(bar), Series::Line(line)) => {
                assert_eq!(bar.data, vec![500.0, 1499.0, 1000.0]);
                assert_eq!(line.y_axis_index, 1);
                assert_eq!(line.data, vec![1.0, 3.0, 2.0]);
            }
            other => panic!("unexpected series {:?}", other),
        }
    }

    #[test]
    fn test_trend_option_is_deterministic() {
        let input = trend();
        assert_eq!(
            build_trend_option(&DEFAULT_THEME, &input),
            build_trend_option(&DEFAULT_THEME, &input)
        );
    }

    #[test]
    fn test_derived_rates_stay_below_three_percent() {
        let input = TrendSeries {
            time_range: TimeRange::OneHour,
            points: (500..1500)
                .step_by(7)
                .map(|v| TimeSeriesPoint::new(String::new(), v))
                .collect(),
        };
        assert!(derive_trend_rates(&input).iter().all(|r| (1.0..=3.0).contains(r)));
    }

    #[test]
    fn test_comparison_option() {
        let rates = vec![NamedValue::new("SRM", 1.25), NamedValue::new("Air leak", 0.4)];
        let before = rates.clone();
        let option = build_comparison_option(&DEFAULT_THEME, &rates, "J11");

        assert_eq!(rates, before);
        let x_axis = option.x_axis.unwrap();
        assert_eq!(x_axis.label.rotate_deg, Some(30));
        assert!(x_axis.label.show_all);
        assert_eq!(option.y_axis[0].label.formatter.as_deref(), Some("{value}%"));
        assert_eq!(option.series.len(), 1);
        assert_eq!(option.series[0].name(), "J11");
    }

    #[test]
    fn test_distribution_option_is_a_ring() {
        let distribution = vec![NamedValue::new("SRM", 120u32), NamedValue::new("Overweight", 380)];
        let before = distribution.clone();
        let option = build_distribution_option(&DEFAULT_THEME, &distribution);

        assert_eq!(distribution, before);
        let Series::Pie(pie) = &option.series[0] else {
            panic!("expected pie series");
        };
        assert!(pie.inner_radius_pct > 0.0);
        assert_eq!(pie.data.len(), 2);
        assert_eq!(pie.data[1].value, 380.0);
        assert_eq!(pie.label.formatter, "{b}: {c} ({d}%)");
    }

    #[test]
    fn test_status_option_bands() {
        let option = build_status_option(&DEFAULT_THEME, 87);
        let Series::Gauge(gauge) = &option.series[0] else {
            panic!("expected gauge series");
        };
        assert_eq!((gauge.min, gauge.max), (0.0, 100.0));
        let bands: Vec<_> = gauge.bands.iter().map(|b| (b.upto, b.color.as_str())).collect();
        assert_eq!(
            bands,
            vec![
                (0.3, DEFAULT_THEME.danger),
                (0.7, DEFAULT_THEME.warning),
                (1.0, DEFAULT_THEME.success)
            ]
        );
        assert!(gauge.detail.value_animation);
        assert_eq!(gauge.value, 87.0);
    }

    #[test]
    fn test_option_serializes() {
        let json = serde_json::to_value(build_status_option(&DEFAULT_THEME, 75)).unwrap();
        assert_eq!(json["series"][0]["type"], "gauge");
        assert!(json.get("xAxis").is_none());
    }
}
