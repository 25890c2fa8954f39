// User provider - Listing and direct describe lookup
use crate::application::error::ProviderError;
use crate::application::quicksight_repository::QuickSightRepository;
use crate::domain::user::User;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn QuickSightRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn QuickSightRepository>) -> Self {
        Self { repository }
    }

    /// First page of users in the configured account and namespace.
    pub async fn list(&self) -> Result<Vec<User>, ProviderError> {
        self.repository
            .list_users()
            .await
            .map_err(|e| ProviderError::User(e.message))
    }

    /// Resolve a user by name (or email, or ARN-as-username) through the
    /// describe call. Fails when the remote reports the user unknown.
    pub async fn get_by(&self, identifier: &str) -> Result<User, ProviderError> {
        self.repository
            .describe_user(identifier)
            .await
            .map_err(|e| ProviderError::User(e.message))
    }
}
