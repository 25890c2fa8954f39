// Data source domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of a QuickSight data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceSummary {
    pub arn: Option<String>,
    pub data_source_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub source_type: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_updated_time: Option<DateTime<Utc>>,
}
