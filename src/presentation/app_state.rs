// Application state for HTTP handlers
use crate::application::analysis_service::AnalysisService;
use crate::application::dashboard_service::DashboardService;
use crate::application::data_source_service::DataSourceService;
use crate::application::embedding_service::EmbeddingService;
use crate::application::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub analysis_service: AnalysisService,
    pub data_source_service: DataSourceService,
    pub user_service: UserService,
    pub embedding_service: EmbeddingService,
}
