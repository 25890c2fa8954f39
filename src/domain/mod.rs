// Domain layer - Read-only projections of QuickSight resources
pub mod analysis;
pub mod dashboard;
pub mod data_source;
pub mod user;
