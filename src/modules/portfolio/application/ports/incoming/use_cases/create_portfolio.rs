use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePortfolioOutcome {
    Created(Uuid),
    /// The owner already had one; nothing was written.
    AlreadyExists(Uuid),
}

impl CreatePortfolioOutcome {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Created(id) | Self::AlreadyExists(id) => *id,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePortfolioError {
    #[error("failed to build starter document: {0}")]
    Serialization(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<CreatePortfolioOutcome, CreatePortfolioError>;
}
