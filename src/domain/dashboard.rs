// Dashboard domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of a QuickSight dashboard, fetched fresh per request.
///
/// Serialized with the remote API's PascalCase field names so the HTTP
/// surface matches what QuickSight itself returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSummary {
    pub arn: Option<String>,
    pub dashboard_id: Option<String>,
    pub name: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_updated_time: Option<DateTime<Utc>>,
    pub published_version_number: Option<i64>,
}

/// Lookup key for scanning dashboard summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardField {
    Arn,
    DashboardId,
    Name,
}

impl DashboardSummary {
    pub fn field(&self, field: DashboardField) -> Option<&str> {
        match field {
            DashboardField::Arn => self.arn.as_deref(),
            DashboardField::DashboardId => self.dashboard_id.as_deref(),
            DashboardField::Name => self.name.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_selects_the_named_attribute() {
        let dashboard = DashboardSummary {
            arn: Some("arn:aws:quicksight:us-east-1:123456789012:dashboard/sales".to_string()),
            dashboard_id: Some("sales".to_string()),
            name: Some("Sales Q1".to_string()),
            created_time: None,
            last_updated_time: None,
            published_version_number: Some(1),
        };

        assert_eq!(dashboard.field(DashboardField::DashboardId), Some("sales"));
        assert_eq!(dashboard.field(DashboardField::Name), Some("Sales Q1"));
        assert!(
            dashboard
                .field(DashboardField::Arn)
                .unwrap()
                .ends_with("dashboard/sales")
        );
    }
}
