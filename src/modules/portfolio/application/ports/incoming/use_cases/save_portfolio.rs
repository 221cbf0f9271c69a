use async_trait::async_trait;
use serde_json::Value;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::PortfolioDocument;
use crate::shared::validation::ValidationIssues;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SavePortfolioError {
    #[error("{0}")]
    Invalid(ValidationIssues),

    #[error("portfolio not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SavePortfolioUseCase: Send + Sync {
    /// `raw` must be the `{ page?, sections }` object. Returns the
    /// document exactly as it was stored.
    async fn execute(
        &self,
        owner: UserId,
        raw: &Value,
    ) -> Result<PortfolioDocument, SavePortfolioError>;
}
