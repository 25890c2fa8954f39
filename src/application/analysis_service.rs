// Analysis provider - Listing only, analysis embedding is not exposed
use crate::application::error::ProviderError;
use crate::application::quicksight_repository::QuickSightRepository;
use crate::domain::analysis::AnalysisSummary;
use std::sync::Arc;

#[derive(Clone)]
pub struct AnalysisService {
    repository: Arc<dyn QuickSightRepository>,
}

impl AnalysisService {
    pub fn new(repository: Arc<dyn QuickSightRepository>) -> Self {
        Self { repository }
    }

    /// First page of analysis summaries.
    pub async fn list(&self) -> Result<Vec<AnalysisSummary>, ProviderError> {
        Ok(self.repository.list_analyses().await?)
    }
}
