use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, GetOwnerPortfolioUseCase, GetPublicPortfolioUseCase,
    PublishPortfolioUseCase, SavePortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub get_owned: Arc<dyn GetOwnerPortfolioUseCase + Send + Sync>,
    pub save: Arc<dyn SavePortfolioUseCase + Send + Sync>,
    pub publish: Arc<dyn PublishPortfolioUseCase + Send + Sync>,
    pub get_public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
}
