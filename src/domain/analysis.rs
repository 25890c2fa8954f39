// Analysis domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of a QuickSight analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisSummary {
    pub arn: Option<String>,
    pub analysis_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_updated_time: Option<DateTime<Utc>>,
}
