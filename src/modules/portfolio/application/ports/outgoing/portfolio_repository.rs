use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio not found")]
    NotFound,

    /// The owner already has a portfolio.
    #[error("Portfolio already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Inserts an unpublished portfolio and returns its id.
    async fn create_portfolio(
        &self,
        owner: UserId,
        document: Value,
    ) -> Result<Uuid, PortfolioRepositoryError>;

    async fn update_document(
        &self,
        owner: UserId,
        document: Value,
    ) -> Result<(), PortfolioRepositoryError>;

    /// Returns the flag as stored.
    async fn set_published(
        &self,
        owner: UserId,
        is_published: bool,
    ) -> Result<bool, PortfolioRepositoryError>;
}
