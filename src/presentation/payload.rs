// Mapper to convert domain models into the JSON payload for the host page
use crate::domain::chart::{ChartKind, ChartSpec, LegendPosition, ValueAxis};
use crate::domain::dashboard::Dashboard;
use serde::Serialize;

/// Top-level response envelope. On failure the host page replaces the
/// whole dashboard container with the single message.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DashboardResponse {
    Success { data: DashboardPayload },
    Error { message: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub title: String,
    pub charts: Vec<ChartPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub target: String,
    pub title: String,
    pub kind: &'static str,
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_axis: Option<AxisPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<&'static str>,
    pub tooltips: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPayload {
    pub title: String,
    pub begin_at_zero: bool,
    pub ticks: Vec<TickPayload>,
}

#[derive(Debug, Serialize)]
pub struct TickPayload {
    pub value: f64,
    pub label: String,
}

pub fn dashboard_to_payload(dashboard: Dashboard) -> DashboardPayload {
    DashboardPayload {
        title: dashboard.title,
        charts: dashboard.charts.into_iter().map(chart_to_payload).collect(),
    }
}

fn chart_to_payload(chart: ChartSpec) -> ChartPayload {
    let kind = match chart.kind {
        ChartKind::Line => "line",
        ChartKind::HorizontalBar => "horizontalBar",
        ChartKind::Doughnut => "doughnut",
    };
    let legend = chart.legend.map(|position| match position {
        LegendPosition::Top => "top",
        LegendPosition::Bottom => "bottom",
    });
    let (labels, values) = chart.series.into_parts();

    ChartPayload {
        target: chart.target.to_string(),
        title: chart.title,
        kind,
        series_label: chart.series_label,
        labels,
        values,
        colors: chart.colors,
        fill_color: chart.fill_color,
        border_color: chart.border_color,
        value_axis: chart.value_axis.map(axis_to_payload),
        legend,
        tooltips: chart.tooltips,
    }
}

fn axis_to_payload(axis: ValueAxis) -> AxisPayload {
    AxisPayload {
        title: axis.title,
        begin_at_zero: axis.begin_at_zero,
        ticks: axis
            .ticks
            .into_iter()
            .map(|t| TickPayload { value: t.value, label: t.label })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::DEFAULT_PALETTE;
    use crate::domain::records::{PaymentRecord, SalesRecord};

    fn sample_dashboard() -> Dashboard {
        let sales = vec![SalesRecord { month: "2022-01".to_string(), revenue: 412358000.0 }];
        let payments =
            vec![PaymentRecord { payment_method: "QRIS".to_string(), order_count: 3200 }];
        let palette: Vec<String> = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        Dashboard::new(
            "Dasbor Penjualan".to_string(),
            vec![
                ChartSpec::revenue_trend(&sales, "#16a34a", "rgba(22,163,74,0.1)", 0),
                ChartSpec::payment_distribution(&payments, &palette),
            ],
        )
    }

    #[test]
    fn test_success_payload_shape() {
        let payload = dashboard_to_payload(sample_dashboard());
        let json = serde_json::to_value(DashboardResponse::Success { data: payload }).unwrap();

        assert_eq!(json["status"], "success");
        let charts = json["data"]["charts"].as_array().unwrap();
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0]["target"], "salesOverTimeChart");
        assert_eq!(charts[0]["kind"], "line");
        assert_eq!(charts[0]["seriesLabel"], "Pendapatan (Rp)");
        assert_eq!(charts[0]["valueAxis"]["beginAtZero"], true);
        assert_eq!(charts[1]["kind"], "doughnut");
        assert_eq!(charts[1]["legend"], "bottom");
        // A doughnut chart has no value axis and the key is omitted.
        assert!(charts[1].get("valueAxis").is_none());
    }

    #[test]
    fn test_error_payload_is_a_single_message_without_chart_content() {
        let json = serde_json::to_value(DashboardResponse::Error {
            message: "Gagal memuat data dashboard.".to_string(),
        })
        .unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Gagal memuat data dashboard.");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_labels_and_values_stay_index_aligned() {
        let payload = dashboard_to_payload(sample_dashboard());
        for chart in &payload.charts {
            assert_eq!(chart.labels.len(), chart.values.len());
            assert_eq!(chart.tooltips.len(), chart.values.len());
        }
    }
}
