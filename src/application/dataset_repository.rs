// Repository trait for dataset access
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Dataset resource names as exported by the analytics step.
pub const SALES_DATASET: &str = "sales_over_time.json";
pub const CATEGORIES_DATASET: &str = "top_categories.json";
pub const PAYMENTS_DATASET: &str = "payment_distribution.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {resource} (status {status})")]
    Transport { resource: String, status: u16 },

    #[error("failed to request {resource}")]
    Request {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {resource}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {resource}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Fetch the raw bytes of a named dataset. One attempt, no retry.
    async fn fetch(&self, resource: &str) -> Result<Bytes, LoadError>;
}

/// Parse a fetched dataset body into typed records.
pub fn parse_records<T: DeserializeOwned>(resource: &str, body: &[u8]) -> Result<Vec<T>, LoadError> {
    serde_json::from_slice(body).map_err(|source| LoadError::Parse {
        resource: resource.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::SalesRecord;

    #[test]
    fn test_parse_records_reports_the_failing_resource() {
        let err = parse_records::<SalesRecord>(SALES_DATASET, b"not json").unwrap_err();
        match err {
            LoadError::Parse { resource, .. } => assert_eq!(resource, SALES_DATASET),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_records_accepts_a_well_formed_body() {
        let records: Vec<SalesRecord> =
            parse_records(SALES_DATASET, br#"[{"month":"2022-01","revenue":1.0}]"#).unwrap();
        assert_eq!(records.len(), 1);
    }
}
