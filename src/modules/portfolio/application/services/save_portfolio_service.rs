use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::{
    normalize_portfolio_data, parse_current_document, PortfolioDocument,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SavePortfolioError, SavePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

pub struct SavePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> SavePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SavePortfolioUseCase for SavePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        raw: &Value,
    ) -> Result<PortfolioDocument, SavePortfolioError> {
        let document = parse_current_document(raw).map_err(|issues| {
            warn!(owner = %owner, %issues, "Portfolio save rejected");
            SavePortfolioError::Invalid(issues)
        })?;

        let normalized = normalize_portfolio_data(&document);
        let stored = serde_json::to_value(&normalized)
            .map_err(|e| SavePortfolioError::RepositoryError(e.to_string()))?;

        self.repository
            .update_document(owner, stored)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => SavePortfolioError::NotFound,
                other => SavePortfolioError::RepositoryError(other.to_string()),
            })?;

        info!(owner = %owner, sections = normalized.sections.len(), "Portfolio saved");

        Ok(normalized)
    }
}
