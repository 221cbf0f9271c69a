use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PublishPortfolioError, PublishPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

pub struct PublishPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> PublishPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PublishPortfolioUseCase for PublishPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        is_published: bool,
    ) -> Result<bool, PublishPortfolioError> {
        let stored = self
            .repository
            .set_published(owner, is_published)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => PublishPortfolioError::NotFound,
                other => PublishPortfolioError::RepositoryError(other.to_string()),
            })?;

        info!(owner = %owner, is_published = stored, "Portfolio visibility changed");

        Ok(stored)
    }
}
