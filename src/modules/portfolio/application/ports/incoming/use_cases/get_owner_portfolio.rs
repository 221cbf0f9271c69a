use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::PortfolioDocument;

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// What the editor loads: the owner's document, sorted and renumbered.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerPortfolio {
    pub id: Uuid,
    pub username: String,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
    pub document: PortfolioDocument,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOwnerPortfolioError {
    /// No portfolio, or one whose stored value cannot be read.
    #[error("portfolio not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetOwnerPortfolioUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<OwnerPortfolio, GetOwnerPortfolioError>;
}
