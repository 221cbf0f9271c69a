use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::portfolio::application::domain::parse_portfolio_document;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetOwnerPortfolioError, GetOwnerPortfolioUseCase, OwnerPortfolio,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

pub struct GetOwnerPortfolioService<P, U>
where
    P: PortfolioQuery,
    U: UserQuery,
{
    portfolios: P,
    users: U,
}

impl<P, U> GetOwnerPortfolioService<P, U>
where
    P: PortfolioQuery,
    U: UserQuery,
{
    pub fn new(portfolios: P, users: U) -> Self {
        Self { portfolios, users }
    }
}

#[async_trait]
impl<P, U> GetOwnerPortfolioUseCase for GetOwnerPortfolioService<P, U>
where
    P: PortfolioQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<OwnerPortfolio, GetOwnerPortfolioError> {
        let record = self
            .portfolios
            .find_by_owner(owner)
            .await
            .map_err(|e| GetOwnerPortfolioError::RepositoryError(e.to_string()))?
            .ok_or(GetOwnerPortfolioError::NotFound)?;

        let user = self
            .users
            .find_by_id(owner)
            .await
            .map_err(|e| GetOwnerPortfolioError::RepositoryError(e.to_string()))?
            .ok_or(GetOwnerPortfolioError::NotFound)?;

        // Stored data we cannot read is treated as absent, not as a 500
        let document = parse_portfolio_document(&record.document).map_err(|issues| {
            error!(owner = %owner, portfolio_id = %record.id, %issues, "Stored portfolio is unreadable");
            GetOwnerPortfolioError::NotFound
        })?;

        Ok(OwnerPortfolio {
            id: record.id,
            username: user.username,
            is_published: record.is_published,
            updated_at: record.updated_at,
            document: document.normalized(),
        })
    }
}
