// Application layer - Provider services and the remote repository seam
pub mod analysis_service;
pub mod dashboard_service;
pub mod data_source_service;
pub mod embedding_service;
pub mod error;
pub mod quicksight_repository;
pub mod user_service;
