// User domain model
use serde::Serialize;

/// A QuickSight user within the configured namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub arn: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub identity_type: Option<String>,
    pub active: bool,
    pub principal_id: Option<String>,
}
