use async_trait::async_trait;

use crate::modules::portfolio::application::domain::PublicPortfolioView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicPortfolioError {
    /// Covers every "nothing to show" case, so the response never
    /// reveals which usernames exist.
    #[error("not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<PublicPortfolioView, GetPublicPortfolioError>;
}
