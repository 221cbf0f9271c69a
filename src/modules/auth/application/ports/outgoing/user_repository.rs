use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Unique violations on email or username are reported as the
    /// matching `*AlreadyExists` variant.
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_username(
        &self,
        user_id: UserId,
        username: &str,
    ) -> Result<(), UserRepositoryError>;
}
