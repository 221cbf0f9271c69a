use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserUseCase, RegisteredUser,
};
use crate::modules::portfolio::application::domain::{PortfolioDocument, PublicPortfolioView};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioOutcome, CreatePortfolioUseCase, GetOwnerPortfolioError,
    GetOwnerPortfolioUseCase, GetPublicPortfolioError, GetPublicPortfolioUseCase, OwnerPortfolio,
    PublishPortfolioError, PublishPortfolioUseCase, SavePortfolioError, SavePortfolioUseCase,
};
use crate::modules::username::application::ports::incoming::use_cases::{
    Availability, CheckUsernameAvailabilityUseCase, UpdateUsernameError, UpdateUsernameUseCase,
};

// Defaults wired into TestAppStateBuilder. Each one fails loudly with a
// repository error so a test that forgets to override it cannot pass by
// accident.

const UNSTUBBED: &str = "use case not stubbed in this test";

pub struct StubRegisterUser;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUser {
    async fn execute(
        &self,
        _email: &str,
        _username: &str,
        _password: &str,
    ) -> Result<RegisteredUser, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(UNSTUBBED.to_string()))
    }
}

pub struct StubCheckUsername;

#[async_trait]
impl CheckUsernameAvailabilityUseCase for StubCheckUsername {
    async fn execute(&self, _raw: &str) -> Availability {
        Availability::error()
    }
}

pub struct StubUpdateUsername;

#[async_trait]
impl UpdateUsernameUseCase for StubUpdateUsername {
    async fn execute(&self, _user_id: UserId, _username: &str) -> Result<String, UpdateUsernameError> {
        Err(UpdateUsernameError::RepositoryError(UNSTUBBED.to_string()))
    }
}

pub struct StubCreatePortfolio {
    result: Result<CreatePortfolioOutcome, CreatePortfolioError>,
}

impl StubCreatePortfolio {
    pub fn created(id: Uuid) -> Self {
        Self {
            result: Ok(CreatePortfolioOutcome::Created(id)),
        }
    }

    pub fn existing(id: Uuid) -> Self {
        Self {
            result: Ok(CreatePortfolioOutcome::AlreadyExists(id)),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(CreatePortfolioError::RepositoryError("down".to_string())),
        }
    }
}

impl Default for StubCreatePortfolio {
    fn default() -> Self {
        Self {
            result: Err(CreatePortfolioError::RepositoryError(UNSTUBBED.to_string())),
        }
    }
}

#[async_trait]
impl CreatePortfolioUseCase for StubCreatePortfolio {
    async fn execute(&self, _owner: UserId) -> Result<CreatePortfolioOutcome, CreatePortfolioError> {
        self.result.clone()
    }
}

pub struct StubGetOwnerPortfolio {
    result: Result<OwnerPortfolio, GetOwnerPortfolioError>,
}

impl StubGetOwnerPortfolio {
    pub fn found(portfolio: OwnerPortfolio) -> Self {
        Self {
            result: Ok(portfolio),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetOwnerPortfolioError::NotFound),
        }
    }
}

impl Default for StubGetOwnerPortfolio {
    fn default() -> Self {
        Self {
            result: Err(GetOwnerPortfolioError::RepositoryError(UNSTUBBED.to_string())),
        }
    }
}

#[async_trait]
impl GetOwnerPortfolioUseCase for StubGetOwnerPortfolio {
    async fn execute(&self, _owner: UserId) -> Result<OwnerPortfolio, GetOwnerPortfolioError> {
        self.result.clone()
    }
}

pub struct StubSavePortfolio;

#[async_trait]
impl SavePortfolioUseCase for StubSavePortfolio {
    async fn execute(
        &self,
        _owner: UserId,
        _raw: &Value,
    ) -> Result<PortfolioDocument, SavePortfolioError> {
        Err(SavePortfolioError::RepositoryError(UNSTUBBED.to_string()))
    }
}

pub struct StubPublishPortfolio;

#[async_trait]
impl PublishPortfolioUseCase for StubPublishPortfolio {
    async fn execute(&self, _owner: UserId, _is_published: bool) -> Result<bool, PublishPortfolioError> {
        Err(PublishPortfolioError::RepositoryError(UNSTUBBED.to_string()))
    }
}

pub struct StubGetPublicPortfolio;

#[async_trait]
impl GetPublicPortfolioUseCase for StubGetPublicPortfolio {
    async fn execute(&self, _username: &str) -> Result<PublicPortfolioView, GetPublicPortfolioError> {
        Err(GetPublicPortfolioError::RepositoryError(UNSTUBBED.to_string()))
    }
}
