use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::ValidationIssues;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUsernameError {
    #[error("{0}")]
    Invalid(ValidationIssues),

    #[error("username already in use")]
    UsernameAlreadyInUse,

    #[error("user not found")]
    UserNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateUsernameUseCase: Send + Sync {
    /// Returns the username now held by the caller.
    async fn execute(&self, user_id: UserId, username: &str)
        -> Result<String, UpdateUsernameError>;
}
