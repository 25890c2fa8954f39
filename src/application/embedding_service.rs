// Embedding provider - Anonymous and registered embed-URL flows
use crate::application::dashboard_service::DashboardService;
use crate::application::error::ProviderError;
use crate::application::quicksight_repository::{
    AnonymousEmbedRequest, QuickSightRepository, RegisteredEmbedRequest, SessionTag,
};
use crate::application::user_service::UserService;
use crate::domain::dashboard::DashboardField;
use std::sync::Arc;

/// Stateless provider composing the dashboard and user lookups with the
/// remote embed-URL calls.
#[derive(Clone)]
pub struct EmbeddingService {
    repository: Arc<dyn QuickSightRepository>,
    dashboards: DashboardService,
    users: UserService,
    /// Raw comma-separated embed-domain allow-list, split per call.
    allowed_domains: Option<String>,
}

impl EmbeddingService {
    pub fn new(
        repository: Arc<dyn QuickSightRepository>,
        dashboards: DashboardService,
        users: UserService,
        allowed_domains: Option<String>,
    ) -> Self {
        Self {
            repository,
            dashboards,
            users,
            allowed_domains,
        }
    }

    /// Embed URL for an anonymous session on the given dashboard.
    ///
    /// The dashboard is resolved through the dashboard provider first, so
    /// an unknown id fails with NotFound before any embed call is made.
    /// The resolved record's ARN becomes the sole authorized resource and
    /// its id names the embedding experience.
    pub async fn anonymous_embed_url(
        &self,
        dashboard_id: &str,
        session_tags: Option<Vec<SessionTag>>,
    ) -> Result<String, ProviderError> {
        let dashboard = self
            .dashboards
            .find_by(DashboardField::DashboardId, dashboard_id)
            .await?;

        let dashboard_arn = dashboard.arn.ok_or_else(|| {
            ProviderError::Embedding(format!("dashboard {dashboard_id} has no ARN"))
        })?;
        let resolved_id = dashboard.dashboard_id.ok_or_else(|| {
            ProviderError::Embedding(format!("dashboard {dashboard_id} has no id"))
        })?;

        let request = AnonymousEmbedRequest {
            dashboard_id: resolved_id,
            dashboard_arn,
            session_tags,
            allowed_domains: self.split_allowed_domains(),
        };

        self.repository
            .generate_anonymous_embed_url(request)
            .await
            .map_err(ProviderError::from_embed_failure)
    }

    /// Embed URL for a registered user on the given dashboard.
    ///
    /// The dashboard id is forwarded as-is, without a dashboard lookup.
    /// A supplied `user_name` always wins: it is resolved through the
    /// describe call and the resulting ARN is used, even when `user_arn`
    /// was also given. With neither identifier the call fails before any
    /// remote request.
    pub async fn registered_embed_url(
        &self,
        dashboard_id: &str,
        user_arn: Option<String>,
        user_name: Option<String>,
    ) -> Result<String, ProviderError> {
        let user_arn = match (user_arn, user_name) {
            (None, None) => {
                return Err(ProviderError::Embedding(
                    "must provide either user_arn or user_name".to_string(),
                ));
            }
            (_, Some(name)) => {
                let user = self.users.get_by(&name).await?;
                user.arn
                    .ok_or_else(|| ProviderError::User(format!("user {name} has no ARN")))?
            }
            (Some(arn), None) => arn,
        };

        let request = RegisteredEmbedRequest {
            dashboard_id: dashboard_id.to_string(),
            user_arn,
            allowed_domains: self.split_allowed_domains(),
        };

        self.repository
            .generate_registered_embed_url(request)
            .await
            .map_err(ProviderError::from_embed_failure)
    }

    fn split_allowed_domains(&self) -> Option<Vec<String>> {
        self.allowed_domains.as_ref().map(|raw| {
            raw.split(',')
                .map(|domain| domain.trim().to_string())
                .filter(|domain| !domain.is_empty())
                .collect()
        })
    }
}
