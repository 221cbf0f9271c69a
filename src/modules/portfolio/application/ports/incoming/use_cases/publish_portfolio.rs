use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PublishPortfolioError {
    #[error("portfolio not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PublishPortfolioUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, is_published: bool)
        -> Result<bool, PublishPortfolioError>;
}
