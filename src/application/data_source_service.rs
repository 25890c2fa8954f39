// Data source provider - Listing only
use crate::application::error::ProviderError;
use crate::application::quicksight_repository::QuickSightRepository;
use crate::domain::data_source::DataSourceSummary;
use std::sync::Arc;

#[derive(Clone)]
pub struct DataSourceService {
    repository: Arc<dyn QuickSightRepository>,
}

impl DataSourceService {
    pub fn new(repository: Arc<dyn QuickSightRepository>) -> Self {
        Self { repository }
    }

    /// First page of data source summaries.
    pub async fn list(&self) -> Result<Vec<DataSourceSummary>, ProviderError> {
        Ok(self.repository.list_data_sources().await?)
    }
}
