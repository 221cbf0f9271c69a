use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, GetOwnerPortfolioUseCase, GetPublicPortfolioUseCase,
    PublishPortfolioUseCase, SavePortfolioUseCase,
};
use crate::modules::username::application::ports::incoming::use_cases::{
    CheckUsernameAvailabilityUseCase, UpdateUsernameUseCase,
};
use crate::modules::username::application::username_use_cases::UsernameUseCases;
use crate::tests::support::stubs::*;
use crate::config::DEFAULT_SITE_URL;
use crate::AppState;

/// Every use case starts as a failing stub; tests override only what the
/// route under test touches.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    username: UsernameUseCases,
    portfolio: PortfolioUseCases,
    site_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUser),
            username: UsernameUseCases {
                check: Arc::new(StubCheckUsername),
                update: Arc::new(StubUpdateUsername),
            },
            portfolio: PortfolioUseCases {
                create: Arc::new(StubCreatePortfolio::default()),
                get_owned: Arc::new(StubGetOwnerPortfolio::default()),
                save: Arc::new(StubSavePortfolio),
                publish: Arc::new(StubPublishPortfolio),
                get_public: Arc::new(StubGetPublicPortfolio),
            },
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_check_username(
        mut self,
        uc: impl CheckUsernameAvailabilityUseCase + 'static,
    ) -> Self {
        self.username.check = Arc::new(uc);
        self
    }

    pub fn with_update_username(mut self, uc: impl UpdateUsernameUseCase + 'static) -> Self {
        self.username.update = Arc::new(uc);
        self
    }

    pub fn with_create_portfolio(mut self, uc: impl CreatePortfolioUseCase + 'static) -> Self {
        self.portfolio.create = Arc::new(uc);
        self
    }

    pub fn with_get_owner_portfolio(
        mut self,
        uc: impl GetOwnerPortfolioUseCase + 'static,
    ) -> Self {
        self.portfolio.get_owned = Arc::new(uc);
        self
    }

    pub fn with_save_portfolio(mut self, uc: impl SavePortfolioUseCase + 'static) -> Self {
        self.portfolio.save = Arc::new(uc);
        self
    }

    pub fn with_publish_portfolio(mut self, uc: impl PublishPortfolioUseCase + 'static) -> Self {
        self.portfolio.publish = Arc::new(uc);
        self
    }

    pub fn with_get_public_portfolio(
        mut self,
        uc: impl GetPublicPortfolioUseCase + 'static,
    ) -> Self {
        self.portfolio.get_public = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user: self.register_user,
            username: self.username,
            portfolio: self.portfolio,
            site_url: self.site_url,
        })
    }
}
