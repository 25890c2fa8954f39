// AWS SDK implementation of the QuickSight repository
use crate::application::quicksight_repository::{
    AnonymousEmbedRequest, QuickSightRepository, RegisteredEmbedRequest, RemoteError,
};
use crate::domain::analysis::AnalysisSummary;
use crate::domain::dashboard::DashboardSummary;
use crate::domain::data_source::DataSourceSummary;
use crate::domain::user::User;
use crate::infrastructure::config::Settings;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_quicksight::Client;
use aws_sdk_quicksight::config::Region;
use aws_sdk_quicksight::error::{BuildError, ProvideErrorMetadata, SdkError};
use aws_sdk_quicksight::primitives::DateTime;
use aws_sdk_quicksight::types::{
    AnonymousUserDashboardEmbeddingConfiguration, AnonymousUserEmbeddingExperienceConfiguration,
    RegisteredUserDashboardEmbeddingConfiguration, RegisteredUserEmbeddingExperienceConfiguration,
    SessionTag,
};
use tracing::{info, warn};

/// Embed sessions are valid for a fixed 30 minutes.
const SESSION_LIFETIME_MINUTES: i64 = 30;

/// Build a QuickSight client from settings.
///
/// Static credentials are used when both the access key id and secret are
/// configured; otherwise the default AWS credential chain applies. No
/// network call happens until first use.
pub async fn build_quicksight_client(settings: &Settings) -> Client {
    let region = Region::new(settings.aws_default_region.clone());

    match (&settings.aws_access_key_id, &settings.aws_secret_access_key) {
        (Some(access_key), Some(secret_key)) => {
            let credentials =
                Credentials::new(access_key, secret_key, None, None, "quicksight-gateway");
            let config = aws_sdk_quicksight::Config::builder()
                .behavior_version(BehaviorVersion::latest())
                .region(region)
                .credentials_provider(credentials)
                .build();
            Client::from_conf(config)
        }
        _ => {
            let config = aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .load()
                .await;
            Client::new(&config)
        }
    }
}

/// Repository backed by the aws-sdk-quicksight client, scoped to one
/// account and namespace.
pub struct SdkQuickSightRepository {
    client: Client,
    account_id: String,
    namespace: String,
}

impl SdkQuickSightRepository {
    pub fn new(client: Client, account_id: String, namespace: String) -> Self {
        info!(
            account_id = %account_id,
            namespace = %namespace,
            "QuickSight repository initialised"
        );
        Self {
            client,
            account_id,
            namespace,
        }
    }
}

fn remote_error<E>(err: SdkError<E>) -> RemoteError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let code = err.code().map(str::to_string);
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());
    warn!(
        code = code.as_deref().unwrap_or("unknown"),
        %message,
        "QuickSight call failed"
    );
    RemoteError { code, message }
}

fn build_error(err: BuildError) -> RemoteError {
    RemoteError::new(None, err.to_string())
}

fn to_chrono(ts: &DateTime) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
}

fn dashboard_summary(s: &aws_sdk_quicksight::types::DashboardSummary) -> DashboardSummary {
    DashboardSummary {
        arn: s.arn().map(str::to_string),
        dashboard_id: s.dashboard_id().map(str::to_string),
        name: s.name().map(str::to_string),
        created_time: s.created_time().and_then(to_chrono),
        last_updated_time: s.last_updated_time().and_then(to_chrono),
        published_version_number: s.published_version_number(),
    }
}

fn analysis_summary(s: &aws_sdk_quicksight::types::AnalysisSummary) -> AnalysisSummary {
    AnalysisSummary {
        arn: s.arn().map(str::to_string),
        analysis_id: s.analysis_id().map(str::to_string),
        name: s.name().map(str::to_string),
        status: s.status().map(|v| v.as_str().to_string()),
        created_time: s.created_time().and_then(to_chrono),
        last_updated_time: s.last_updated_time().and_then(to_chrono),
    }
}

fn data_source_summary(s: &aws_sdk_quicksight::types::DataSource) -> DataSourceSummary {
    DataSourceSummary {
        arn: s.arn().map(str::to_string),
        data_source_id: s.data_source_id().map(str::to_string),
        name: s.name().map(str::to_string),
        source_type: s.r#type().map(|v| v.as_str().to_string()),
        created_time: s.created_time().and_then(to_chrono),
        last_updated_time: s.last_updated_time().and_then(to_chrono),
    }
}

fn user(u: &aws_sdk_quicksight::types::User) -> User {
    User {
        arn: u.arn().map(str::to_string),
        user_name: u.user_name().map(str::to_string),
        email: u.email().map(str::to_string),
        role: u.role().map(|v| v.as_str().to_string()),
        identity_type: u.identity_type().map(|v| v.as_str().to_string()),
        active: u.active(),
        principal_id: u.principal_id().map(str::to_string),
    }
}

#[async_trait]
impl QuickSightRepository for SdkQuickSightRepository {
    async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>, RemoteError> {
        // First page only; the next_token is deliberately not followed.
        let output = self
            .client
            .list_dashboards()
            .aws_account_id(&self.account_id)
            .send()
            .await
            .map_err(remote_error)?;

        Ok(output
            .dashboard_summary_list()
            .iter()
            .map(dashboard_summary)
            .collect())
    }

    async fn list_analyses(&self) -> Result<Vec<AnalysisSummary>, RemoteError> {
        let output = self
            .client
            .list_analyses()
            .aws_account_id(&self.account_id)
            .send()
            .await
            .map_err(remote_error)?;

        Ok(output
            .analysis_summary_list()
            .iter()
            .map(analysis_summary)
            .collect())
    }

    async fn list_data_sources(&self) -> Result<Vec<DataSourceSummary>, RemoteError> {
        let output = self
            .client
            .list_data_sources()
            .aws_account_id(&self.account_id)
            .send()
            .await
            .map_err(remote_error)?;

        Ok(output
            .data_sources()
            .iter()
            .map(data_source_summary)
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<User>, RemoteError> {
        let output = self
            .client
            .list_users()
            .aws_account_id(&self.account_id)
            .namespace(&self.namespace)
            .send()
            .await
            .map_err(remote_error)?;

        Ok(output.user_list().iter().map(user).collect())
    }

    async fn describe_user(&self, user_name: &str) -> Result<User, RemoteError> {
        let output = self
            .client
            .describe_user()
            .aws_account_id(&self.account_id)
            .namespace(&self.namespace)
            .user_name(user_name)
            .send()
            .await
            .map_err(remote_error)?;

        output.user().map(user).ok_or_else(|| {
            RemoteError::new(None, format!("no user record returned for {user_name}"))
        })
    }

    async fn generate_anonymous_embed_url(
        &self,
        request: AnonymousEmbedRequest,
    ) -> Result<String, RemoteError> {
        let experience = AnonymousUserEmbeddingExperienceConfiguration::builder()
            .dashboard(
                AnonymousUserDashboardEmbeddingConfiguration::builder()
                    .initial_dashboard_id(&request.dashboard_id)
                    .build()
                    .map_err(build_error)?,
            )
            .build();

        let mut call = self
            .client
            .generate_embed_url_for_anonymous_user()
            .aws_account_id(&self.account_id)
            .namespace(&self.namespace)
            .session_lifetime_in_minutes(SESSION_LIFETIME_MINUTES)
            .authorized_resource_arns(&request.dashboard_arn)
            .experience_configuration(experience);

        if let Some(tags) = &request.session_tags {
            for tag in tags {
                call = call.session_tags(
                    SessionTag::builder()
                        .key(&tag.key)
                        .value(&tag.value)
                        .build()
                        .map_err(build_error)?,
                );
            }
        }
        if let Some(domains) = &request.allowed_domains {
            for domain in domains {
                call = call.allowed_domains(domain);
            }
        }

        let output = call.send().await.map_err(remote_error)?;
        Ok(output.embed_url().to_string())
    }

    async fn generate_registered_embed_url(
        &self,
        request: RegisteredEmbedRequest,
    ) -> Result<String, RemoteError> {
        let experience = RegisteredUserEmbeddingExperienceConfiguration::builder()
            .dashboard(
                RegisteredUserDashboardEmbeddingConfiguration::builder()
                    .initial_dashboard_id(&request.dashboard_id)
                    .build()
                    .map_err(build_error)?,
            )
            .build();

        let mut call = self
            .client
            .generate_embed_url_for_registered_user()
            .aws_account_id(&self.account_id)
            .session_lifetime_in_minutes(SESSION_LIFETIME_MINUTES)
            .user_arn(&request.user_arn)
            .experience_configuration(experience);

        if let Some(domains) = &request.allowed_domains {
            for domain in domains {
                call = call.allowed_domains(domain);
            }
        }

        let output = call.send().await.map_err(remote_error)?;
        Ok(output.embed_url().to_string())
    }
}
