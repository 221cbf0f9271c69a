use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::credentials::Username;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::modules::username::application::ports::incoming::use_cases::{
    UpdateUsernameError, UpdateUsernameUseCase,
};

pub struct UpdateUsernameService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateUsernameService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateUsernameUseCase for UpdateUsernameService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        username: &str,
    ) -> Result<String, UpdateUsernameError> {
        let username = Username::parse(username).map_err(UpdateUsernameError::Invalid)?;

        let owner = self
            .query
            .find_by_username(username.as_str())
            .await
            .map_err(|e| UpdateUsernameError::RepositoryError(e.to_string()))?;

        match owner {
            Some(existing) if existing.id == user_id => {
                return Ok(username.into_inner());
            }
            Some(_) => {
                warn!(user_id = %user_id, username = %username, "Username held by another user");
                return Err(UpdateUsernameError::UsernameAlreadyInUse);
            }
            None => {}
        }

        self.repository
            .update_username(user_id, username.as_str())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameAlreadyExists => {
                    UpdateUsernameError::UsernameAlreadyInUse
                }
                UserRepositoryError::NotFound => UpdateUsernameError::UserNotFound,
                other => UpdateUsernameError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, username = %username, "Username changed");

        Ok(username.into_inner())
    }
}
