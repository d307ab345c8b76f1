// Filesystem dataset repository
use crate::application::dataset_repository::{DatasetRepository, LoadError};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

/// Reads datasets from a local directory, one file per resource.
#[derive(Debug, Clone)]
pub struct FileDatasetRepository {
    root: PathBuf,
}

impl FileDatasetRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DatasetRepository for FileDatasetRepository {
    async fn fetch(&self, resource: &str) -> Result<Bytes, LoadError> {
        let path = self.root.join(resource);
        tracing::debug!("reading dataset from {}", path.display());

        let body = tokio::fs::read(&path).await.map_err(|source| LoadError::Io {
            resource: resource.to_string(),
            source,
        })?;

        Ok(Bytes::from(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_a_missing_file_is_an_io_error_naming_the_resource() {
        let repo = FileDatasetRepository::new("no/such/dir");
        let err = repo.fetch("sales_over_time.json").await.unwrap_err();

        match err {
            LoadError::Io { resource, .. } => assert_eq!(resource, "sales_over_time.json"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
