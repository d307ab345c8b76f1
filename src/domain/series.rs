// Index-aligned label/value pairs feeding a single chart
use super::records::{CategoryRecord, PaymentRecord, SalesRecord};

/// Labels and values for one chart, index-aligned: `labels()[i]` describes
/// `values()[i]`. The fields are private so the alignment cannot be broken
/// after construction; the only constructor unzips label/value pairs, so
/// both sides always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    fn from_pairs(pairs: impl IntoIterator<Item = (String, f64)>) -> Self {
        let (labels, values) = pairs.into_iter().unzip();
        Self { labels, values }
    }

    /// Month labels and revenue values, in source order.
    pub fn from_sales(records: &[SalesRecord]) -> Self {
        Self::from_pairs(records.iter().map(|r| (r.month.clone(), r.revenue)))
    }

    /// Category labels and pre-scaled millions values, in source order.
    pub fn from_categories(records: &[CategoryRecord]) -> Self {
        Self::from_pairs(records.iter().map(|r| (r.category.clone(), r.revenue_mil)))
    }

    /// Payment method labels and order counts.
    pub fn from_payments(records: &[PaymentRecord]) -> Self {
        Self::from_pairs(
            records
                .iter()
                .map(|r| (r.payment_method.clone(), r.order_count as f64)),
        )
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Largest value in the series, or 0.0 when the series is empty.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Sum of all values in the series.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.labels, self.values)
    }
}
