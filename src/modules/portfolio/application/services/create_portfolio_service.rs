use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::{default_sections, PortfolioDocument};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioOutcome, CreatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository, PortfolioRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreatePortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn existing_id(&self, owner: UserId) -> Result<Option<Uuid>, CreatePortfolioError> {
        let existing = self
            .query
            .find_by_owner(owner)
            .await
            .map_err(|e| CreatePortfolioError::RepositoryError(e.to_string()))?;
        Ok(existing.map(|record| record.id))
    }
}

#[async_trait]
impl<Q, R> CreatePortfolioUseCase for CreatePortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<CreatePortfolioOutcome, CreatePortfolioError> {
        if let Some(id) = self.existing_id(owner).await? {
            return Ok(CreatePortfolioOutcome::AlreadyExists(id));
        }

        let document = PortfolioDocument::new(default_sections())
            .to_stored_value()
            .map_err(|e| CreatePortfolioError::Serialization(e.to_string()))?;

        match self.repository.create_portfolio(owner, document).await {
            Ok(id) => {
                info!(owner = %owner, portfolio_id = %id, "Portfolio created");
                Ok(CreatePortfolioOutcome::Created(id))
            }
            // Lost a race with a concurrent create for the same owner
            Err(PortfolioRepositoryError::AlreadyExists) => {
                warn!(owner = %owner, "Concurrent portfolio create");
                let id = self.existing_id(owner).await?.ok_or_else(|| {
                    CreatePortfolioError::RepositoryError(
                        "portfolio missing after unique violation".to_string(),
                    )
                })?;
                Ok(CreatePortfolioOutcome::AlreadyExists(id))
            }
            Err(e) => Err(CreatePortfolioError::RepositoryError(e.to_string())),
        }
    }
}
