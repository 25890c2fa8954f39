// HTTP request handlers
use crate::application::error::ProviderError;
use crate::application::quicksight_repository::SessionTag;
use crate::domain::analysis::AnalysisSummary;
use crate::domain::dashboard::DashboardSummary;
use crate::domain::data_source::DataSourceSummary;
use crate::domain::user::User;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProviderError::NotFound { .. } => StatusCode::NOT_FOUND,
            ProviderError::PricingPlan => StatusCode::FORBIDDEN,
            ProviderError::Embedding(_) | ProviderError::User(_) | ProviderError::Remote(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn list_dashboards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DashboardSummary>>, ProviderError> {
    Ok(Json(state.dashboard_service.list().await?))
}

pub async fn list_analyses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AnalysisSummary>>, ProviderError> {
    Ok(Json(state.analysis_service.list().await?))
}

pub async fn list_data_sources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DataSourceSummary>>, ProviderError> {
    Ok(Json(state.data_source_service.list().await?))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ProviderError> {
    Ok(Json(state.user_service.list().await?))
}

#[derive(Deserialize)]
pub struct AnonymousEmbedQuery {
    pub session_tags: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisteredEmbedQuery {
    pub user_arn: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmbedUrlResponse {
    pub embed_url: String,
}

/// Embed URL for an anonymous session on the given dashboard.
pub async fn anonymous_embed_url(
    Path(dashboard_id): Path<String>,
    Query(query): Query<AnonymousEmbedQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmbedUrlResponse>, ProviderError> {
    let session_tags = parse_session_tags(query.session_tags.as_deref())?;
    let embed_url = state
        .embedding_service
        .anonymous_embed_url(&dashboard_id, session_tags)
        .await?;
    Ok(Json(EmbedUrlResponse { embed_url }))
}

/// Embed URL for a registered user on the given dashboard.
pub async fn registered_embed_url(
    Path(dashboard_id): Path<String>,
    Query(query): Query<RegisteredEmbedQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmbedUrlResponse>, ProviderError> {
    let embed_url = state
        .embedding_service
        .registered_embed_url(&dashboard_id, query.user_arn, query.user_name)
        .await?;
    Ok(Json(EmbedUrlResponse { embed_url }))
}

/// Split a comma-separated `key=value` string into session tags.
///
/// An absent or blank value yields no tags at all, never an empty list.
/// A pair without `=` fails before any remote call is made.
fn parse_session_tags(raw: Option<&str>) -> Result<Option<Vec<SessionTag>>, ProviderError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let mut tags = Vec::new();
    for pair in raw.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(ProviderError::Embedding(format!(
                "invalid session tag {pair:?}, expected key=value"
            )));
        };
        tags.push(SessionTag {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        });
    }
    Ok(Some(tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_session_tags_forward_nothing() {
        assert_eq!(parse_session_tags(None).unwrap(), None);
        assert_eq!(parse_session_tags(Some("")).unwrap(), None);
        assert_eq!(parse_session_tags(Some("   ")).unwrap(), None);
    }

    #[test]
    fn comma_separated_pairs_are_split_into_tags() {
        let tags = parse_session_tags(Some("region=emea,team=sales"))
            .unwrap()
            .unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].key, "region");
        assert_eq!(tags[0].value, "emea");
        assert_eq!(tags[1].key, "team");
        assert_eq!(tags[1].value, "sales");
    }

    #[test]
    fn malformed_pair_is_an_embedding_error() {
        let err = parse_session_tags(Some("region=emea,notapair")).unwrap_err();
        assert!(matches!(err, ProviderError::Embedding(_)));
    }

    #[test]
    fn error_variants_map_to_their_status_codes() {
        let response = ProviderError::NotFound {
            resource: "dashboard",
            field: "DashboardId".to_string(),
            value: "sales".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ProviderError::PricingPlan.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = ProviderError::Embedding("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ProviderError::User("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
