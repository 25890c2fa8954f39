// Dashboard provider - Listing and lookup-by-field
use crate::application::error::ProviderError;
use crate::application::quicksight_repository::QuickSightRepository;
use crate::domain::dashboard::{DashboardField, DashboardSummary};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn QuickSightRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn QuickSightRepository>) -> Self {
        Self { repository }
    }

    /// First page of dashboard summaries, in the order the remote
    /// returned them.
    pub async fn list(&self) -> Result<Vec<DashboardSummary>, ProviderError> {
        Ok(self.repository.list_dashboards().await?)
    }

    /// First entry whose `field` value contains `value` as a substring.
    ///
    /// Matching is substring containment, not equality. Resolves a
    /// human-friendly id or name into the full record, notably its ARN.
    pub async fn find_by(
        &self,
        field: DashboardField,
        value: &str,
    ) -> Result<DashboardSummary, ProviderError> {
        let dashboards = self.list().await?;
        dashboards
            .into_iter()
            .find(|d| d.field(field).is_some_and(|v| v.contains(value)))
            .ok_or_else(|| ProviderError::NotFound {
                resource: "dashboard",
                field: format!("{field:?}"),
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::quicksight_repository::{
        AnonymousEmbedRequest, RegisteredEmbedRequest, RemoteError,
    };
    use crate::domain::analysis::AnalysisSummary;
    use crate::domain::data_source::DataSourceSummary;
    use crate::domain::user::User;
    use async_trait::async_trait;

    struct FakeRepository {
        dashboards: Vec<DashboardSummary>,
    }

    #[async_trait]
    impl QuickSightRepository for FakeRepository {
        async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>, RemoteError> {
            Ok(self.dashboards.clone())
        }

        async fn list_analyses(&self) -> Result<Vec<AnalysisSummary>, RemoteError> {
            Ok(Vec::new())
        }

        async fn list_data_sources(&self) -> Result<Vec<DataSourceSummary>, RemoteError> {
            Ok(Vec::new())
        }

        async fn list_users(&self) -> Result<Vec<User>, RemoteError> {
            Ok(Vec::new())
        }

        async fn describe_user(&self, user_name: &str) -> Result<User, RemoteError> {
            Err(RemoteError::new(
                Some("ResourceNotFoundException".to_string()),
                format!("unknown user {user_name}"),
            ))
        }

        async fn generate_anonymous_embed_url(
            &self,
            _request: AnonymousEmbedRequest,
        ) -> Result<String, RemoteError> {
            Err(RemoteError::new(None, "not used in this test"))
        }

        async fn generate_registered_embed_url(
            &self,
            _request: RegisteredEmbedRequest,
        ) -> Result<String, RemoteError> {
            Err(RemoteError::new(None, "not used in this test"))
        }
    }

    fn dashboard(id: &str, name: &str) -> DashboardSummary {
        DashboardSummary {
            arn: Some(format!(
                "arn:aws:quicksight:us-east-1:123456789012:dashboard/{id}"
            )),
            dashboard_id: Some(id.to_string()),
            name: Some(name.to_string()),
            created_time: None,
            last_updated_time: None,
            published_version_number: Some(1),
        }
    }

    fn service(dashboards: Vec<DashboardSummary>) -> DashboardService {
        DashboardService::new(Arc::new(FakeRepository { dashboards }))
    }

    #[tokio::test]
    async fn find_by_on_empty_list_is_not_found() {
        let service = service(Vec::new());

        let err = service
            .find_by(DashboardField::Name, "anything")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::NotFound { .. }));
    }

    #[tokio::test]
    async fn find_by_returns_first_substring_match() {
        let service = service(vec![
            dashboard("d-1", "Sales Q1"),
            dashboard("d-2", "Sales Q2"),
        ]);

        let hit = service.find_by(DashboardField::Name, "Q2").await.unwrap();
        assert_eq!(hit.dashboard_id.as_deref(), Some("d-2"));

        // A partial match picks the first containing record.
        let hit = service.find_by(DashboardField::Name, "Sales").await.unwrap();
        assert_eq!(hit.dashboard_id.as_deref(), Some("d-1"));
    }

    #[tokio::test]
    async fn find_by_matches_on_the_requested_field_only() {
        let service = service(vec![dashboard("sales-q1", "Revenue")]);

        let err = service
            .find_by(DashboardField::Name, "sales")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { .. }));

        let hit = service
            .find_by(DashboardField::DashboardId, "sales")
            .await
            .unwrap();
        assert_eq!(hit.name.as_deref(), Some("Revenue"));
    }
}
