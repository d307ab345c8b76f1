// Dashboard service - Use case for building the dashboard
use crate::application::dataset_repository::{
    parse_records, DatasetRepository, LoadError, CATEGORIES_DATASET, PAYMENTS_DATASET,
    SALES_DATASET,
};
use crate::domain::chart::ChartSpec;
use crate::domain::dashboard::Dashboard;
use crate::domain::records::{months_chronological, CategoryRecord, PaymentRecord, SalesRecord};
use crate::infrastructure::config::ChartStyle;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

/// Failure of a whole dashboard build. Typed loading means every failure
/// is a load failure; a dataset that parses is already shaped for the
/// chart builders.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DatasetRepository>,
    style: ChartStyle,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DatasetRepository>, style: ChartStyle) -> Self {
        Self { repository, style }
    }

    /// Build the full dashboard: fan out the three dataset loads, join,
    /// then assemble one chart per dataset. The first failure aborts the
    /// whole build; no partial dashboard is ever returned. Every call
    /// re-attempts all three loads.
    pub async fn build_dashboard(&self) -> Result<Dashboard, DashboardError> {
        let (sales, categories, payments) = futures::try_join!(
            self.load::<SalesRecord>(SALES_DATASET),
            self.load::<CategoryRecord>(CATEGORIES_DATASET),
            self.load::<PaymentRecord>(PAYMENTS_DATASET),
        )?;

        if !months_chronological(&sales) {
            tracing::warn!("months in {} are not chronological; keeping source order", SALES_DATASET);
        }

        let charts = vec![
            ChartSpec::revenue_trend(
                &sales,
                &self.style.line_color,
                &self.style.line_fill,
                self.style.tick_decimals,
            ),
            ChartSpec::top_categories(&categories, &self.style.bar_color, &self.style.bar_border),
            ChartSpec::payment_distribution(&payments, &self.style.palette),
        ];

        Ok(Dashboard::new("Dasbor Penjualan".to_string(), charts))
    }

    async fn load<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, DashboardError> {
        let body = self.repository.fetch(resource).await?;
        let records = parse_records::<T>(resource, &body)?;
        if records.is_empty() {
            tracing::warn!("{} is empty", resource);
        }
        tracing::debug!("loaded {} records from {}", records.len(), resource);
        Ok(records)
    }
}
