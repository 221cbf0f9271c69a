use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::credentials::RegistrationInput;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserUseCase, RegisteredUser,
};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<RegisteredUser, RegisterUserError> {
        let input = RegistrationInput::parse(email, username, password).map_err(|issues| {
            warn!(%issues, "Registration rejected");
            RegisterUserError::Invalid(issues)
        })?;

        let email_taken = self
            .query
            .find_by_email(input.email.as_str())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if email_taken.is_some() {
            return Err(RegisterUserError::EmailAlreadyInUse);
        }

        let username_taken = self
            .query
            .find_by_username(input.username.as_str())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if username_taken.is_some() {
            return Err(RegisterUserError::UsernameAlreadyInUse);
        }

        let password_hash = self
            .password_hasher
            .hash_password(input.password.expose())
            .await
            .map_err(|e| {
                error!(error = %e, "Password hashing failed");
                RegisterUserError::HashingFailed(e.to_string())
            })?;

        // The lookups above race with concurrent sign-ups; the unique
        // constraints behind create_user are the final guard.
        let user = self
            .repository
            .create_user(NewUser {
                email: input.email.as_str().to_string(),
                username: input.username.into_inner(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyInUse,
                UserRepositoryError::UsernameAlreadyExists => {
                    RegisterUserError::UsernameAlreadyInUse
                }
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
                UserRepositoryError::NotFound => RegisterUserError::RepositoryError(
                    "unexpected not found while creating user".to_string(),
                ),
            })?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(RegisteredUser {
            id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}
