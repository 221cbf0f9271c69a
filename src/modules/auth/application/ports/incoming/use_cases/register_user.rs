use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::ValidationIssues;

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,
    #[schema(example = "ada_l")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    Invalid(ValidationIssues),

    #[error("email already in use")]
    EmailAlreadyInUse,

    #[error("username already in use")]
    UsernameAlreadyInUse,

    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<RegisteredUser, RegisterUserError>;
}
