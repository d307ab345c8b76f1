// Chart specifications handed to the host renderer
use super::format;
use super::records::{CategoryRecord, PaymentRecord, SalesRecord};
use super::series::ChartSeries;

/// Mount point ids on the host page, one per chart.
pub const SALES_CHART_TARGET: &str = "salesOverTimeChart";
pub const CATEGORY_CHART_TARGET: &str = "topCategoriesChart";
pub const PAYMENT_CHART_TARGET: &str = "paymentDistributionChart";

/// Segment colors used when the configured palette is empty.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#a855f7",
];

const MAX_AXIS_TICKS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    HorizontalBar,
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Value-axis configuration. An empty tick list leaves tick placement to
/// the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub title: String,
    pub begin_at_zero: bool,
    pub ticks: Vec<AxisTick>,
}

impl ValueAxis {
    /// Zero-based axis with ticks at a round step in millions of rupiah,
    /// labeled "Rp N Jt". The tick run covers `max` with at most
    /// `MAX_AXIS_TICKS` ticks. `tick_decimals` is the minimum number of
    /// fraction digits; more are used when the step itself is fractional.
    pub fn millions(title: impl Into<String>, max: f64, tick_decimals: usize) -> Self {
        let max_jt = (max / 1_000_000.0).max(0.0);
        let step = if max_jt > 0.0 {
            nice_step(max_jt / (MAX_AXIS_TICKS - 1) as f64)
        } else {
            1.0
        };
        let decimals = tick_decimals.max(step_decimals(step));

        let count = if max_jt > 0.0 {
            (max_jt / step).ceil() as usize + 1
        } else {
            1
        };
        let ticks = (0..count)
            .map(|i| {
                let jt = step * i as f64;
                AxisTick {
                    value: jt * 1_000_000.0,
                    label: format::format_jt(jt, decimals),
                }
            })
            .collect();

        Self { title: title.into(), begin_at_zero: true, ticks }
    }
}

/// Smallest of 1, 2, 5 (times a power of ten) that is >= `raw`.
fn nice_step(raw: f64) -> f64 {
    let base = 10f64.powf(raw.log10().floor());
    for multiple in [1.0, 2.0, 5.0] {
        if multiple * base >= raw {
            return multiple * base;
        }
    }
    10.0 * base
}

/// Fraction digits needed to print a 1/2/5-style step exactly.
fn step_decimals(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 6 && scaled.fract().abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Everything the host renderer needs to draw one chart: the series, the
/// styling, the axis, and one pre-formatted tooltip line per data point.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub target: &'static str,
    pub title: String,
    pub kind: ChartKind,
    pub series_label: String,
    pub series: ChartSeries,
    /// Stroke color for line charts, bar fill for bar charts, one entry
    /// per segment for doughnut charts.
    pub colors: Vec<String>,
    pub fill_color: Option<String>,
    pub border_color: Option<String>,
    pub value_axis: Option<ValueAxis>,
    pub legend: Option<LegendPosition>,
    pub tooltips: Vec<String>,
}

impl ChartSpec {
    /// Monthly revenue as a filled line chart. Tooltips carry the full
    /// rupiah amount; the y-axis is labeled in millions.
    pub fn revenue_trend(
        records: &[SalesRecord],
        line_color: &str,
        fill_color: &str,
        tick_decimals: usize,
    ) -> Self {
        let series = ChartSeries::from_sales(records);
        let series_label = "Pendapatan (Rp)".to_string();
        let tooltips = series
            .values()
            .iter()
            .map(|v| format!("{}: {}", series_label, format::format_rupiah(*v)))
            .collect();
        let value_axis = ValueAxis::millions("Pendapatan (Rp)", series.max_value(), tick_decimals);

        Self {
            target: SALES_CHART_TARGET,
            title: "Pendapatan Bulanan".to_string(),
            kind: ChartKind::Line,
            series_label,
            series,
            colors: vec![line_color.to_string()],
            fill_color: Some(fill_color.to_string()),
            border_color: None,
            value_axis: Some(value_axis),
            legend: Some(LegendPosition::Top),
            tooltips,
        }
    }

    /// Top categories as a horizontal bar chart. Values arrive pre-scaled
    /// to millions and are shown as delivered, never recomputed.
    pub fn top_categories(records: &[CategoryRecord], bar_color: &str, bar_border: &str) -> Self {
        let series = ChartSeries::from_categories(records);
        let tooltips = series
            .values()
            .iter()
            .map(|v| format!("Revenue: {} Juta Rp", format::format_id(*v, 2)))
            .collect();

        Self {
            target: CATEGORY_CHART_TARGET,
            title: "Kategori Teratas".to_string(),
            kind: ChartKind::HorizontalBar,
            series_label: "Revenue (Jutaan Rp)".to_string(),
            series,
            colors: vec![bar_color.to_string()],
            fill_color: None,
            border_color: Some(bar_border.to_string()),
            value_axis: Some(ValueAxis {
                title: "Revenue (Jutaan Rp)".to_string(),
                begin_at_zero: true,
                ticks: Vec::new(),
            }),
            legend: None,
            tooltips,
        }
    }

    /// Payment methods as a doughnut chart. Segment colors cycle through
    /// the palette by index; each tooltip carries the grouped order count
    /// and the segment's share of the total at one decimal place.
    pub fn payment_distribution(records: &[PaymentRecord], palette: &[String]) -> Self {
        let series = ChartSeries::from_payments(records);
        let total = series.total();
        let tooltips = series
            .labels()
            .iter()
            .zip(series.values())
            .map(|(label, count)| {
                format!(
                    "{}: {} ({}%)",
                    label,
                    format::group_thousands(*count as i64),
                    format::format_percent(*count, total)
                )
            })
            .collect();
        let colors = (0..series.len())
            .map(|i| {
                if palette.is_empty() {
                    DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()].to_string()
                } else {
                    palette[i % palette.len()].clone()
                }
            })
            .collect();

        Self {
            target: PAYMENT_CHART_TARGET,
            title: "Distribusi Pembayaran".to_string(),
            kind: ChartKind::Doughnut,
            series_label: "Jumlah Pesanan".to_string(),
            series,
            colors,
            fill_color: None,
            border_color: None,
            value_axis: None,
            legend: Some(LegendPosition::Bottom),
            tooltips,
        }
    }
}
