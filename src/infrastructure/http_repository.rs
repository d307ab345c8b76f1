// HTTP dataset repository
use crate::application::dataset_repository::{DatasetRepository, LoadError};
use async_trait::async_trait;
use bytes::Bytes;

/// Fetches datasets from a static file host over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDatasetRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDatasetRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(resource))
    }
}

#[async_trait]
impl DatasetRepository for HttpDatasetRepository {
    async fn fetch(&self, resource: &str) -> Result<Bytes, LoadError> {
        let url = self.resource_url(resource);
        tracing::debug!("fetching dataset from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| LoadError::Request {
                resource: resource.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(LoadError::Transport {
                resource: resource.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.bytes().await.map_err(|source| LoadError::Request {
            resource: resource.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_normalizes_and_encodes() {
        let repo = HttpDatasetRepository::new("http://localhost:9000/data/");
        assert_eq!(
            repo.resource_url("sales_over_time.json"),
            "http://localhost:9000/data/sales_over_time.json"
        );
        assert_eq!(
            repo.resource_url("top categories.json"),
            "http://localhost:9000/data/top%20categories.json"
        );
    }
}
