// Repository trait for QuickSight API access
use crate::domain::analysis::AnalysisSummary;
use crate::domain::dashboard::DashboardSummary;
use crate::domain::data_source::DataSourceSummary;
use crate::domain::user::User;
use async_trait::async_trait;

/// Failure reported by the remote QuickSight API.
///
/// `code` carries the opaque error code string from the remote response
/// when one was present; local transport failures have no code.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    pub code: Option<String>,
    pub message: String,
}

impl RemoteError {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Row-level-security context tag attached to an anonymous embed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnonymousEmbedRequest {
    pub dashboard_id: String,
    /// The sole authorized resource for the embed session.
    pub dashboard_arn: String,
    pub session_tags: Option<Vec<SessionTag>>,
    pub allowed_domains: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredEmbedRequest {
    pub dashboard_id: String,
    pub user_arn: String,
    pub allowed_domains: Option<Vec<String>>,
}

/// Seam to the QuickSight management API.
///
/// List calls return the first page only; pagination tokens are not
/// followed.
#[async_trait]
pub trait QuickSightRepository: Send + Sync {
    async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>, RemoteError>;

    async fn list_analyses(&self) -> Result<Vec<AnalysisSummary>, RemoteError>;

    async fn list_data_sources(&self) -> Result<Vec<DataSourceSummary>, RemoteError>;

    /// First page of users for the configured account and namespace.
    async fn list_users(&self) -> Result<Vec<User>, RemoteError>;

    /// Direct describe call keyed by user name; fails when the remote
    /// reports the user unknown.
    async fn describe_user(&self, user_name: &str) -> Result<User, RemoteError>;

    /// Generate a signed embed URL for an anonymous session.
    async fn generate_anonymous_embed_url(
        &self,
        request: AnonymousEmbedRequest,
    ) -> Result<String, RemoteError>;

    /// Generate a signed embed URL for a registered user.
    async fn generate_registered_embed_url(
        &self,
        request: RegisteredEmbedRequest,
    ) -> Result<String, RemoteError>;
}
