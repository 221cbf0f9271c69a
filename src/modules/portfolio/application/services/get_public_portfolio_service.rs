use async_trait::async_trait;
use tracing::{debug, error};

use crate::auth::application::domain::credentials::Username;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::portfolio::application::domain::{parse_portfolio_document, PublicPortfolioView};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPublicPortfolioError, GetPublicPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

pub struct GetPublicPortfolioService<P, U>
where
    P: PortfolioQuery,
    U: UserQuery,
{
    portfolios: P,
    users: U,
}

impl<P, U> GetPublicPortfolioService<P, U>
where
    P: PortfolioQuery,
    U: UserQuery,
{
    pub fn new(portfolios: P, users: U) -> Self {
        Self { portfolios, users }
    }
}

#[async_trait]
impl<P, U> GetPublicPortfolioUseCase for GetPublicPortfolioService<P, U>
where
    P: PortfolioQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<PublicPortfolioView, GetPublicPortfolioError> {
        let Ok(username) = Username::parse(username) else {
            return Err(GetPublicPortfolioError::NotFound);
        };

        let user = self
            .users
            .find_by_username(username.as_str())
            .await
            .map_err(|e| GetPublicPortfolioError::RepositoryError(e.to_string()))?
            .ok_or(GetPublicPortfolioError::NotFound)?;

        let record = self
            .portfolios
            .find_by_owner(user.id)
            .await
            .map_err(|e| GetPublicPortfolioError::RepositoryError(e.to_string()))?
            .ok_or(GetPublicPortfolioError::NotFound)?;

        if !record.is_published {
            debug!(username = %username, "Portfolio is not published");
            return Err(GetPublicPortfolioError::NotFound);
        }

        let document = parse_portfolio_document(&record.document).map_err(|issues| {
            error!(portfolio_id = %record.id, %issues, "Published portfolio is unreadable");
            GetPublicPortfolioError::NotFound
        })?;

        Ok(PublicPortfolioView::build(&user.username, &document))
    }
}
