mod create_portfolio;
mod get_owner_portfolio;
mod get_public_portfolio;
mod publish_portfolio;
mod save_portfolio;

pub use create_portfolio::{CreatePortfolioError, CreatePortfolioOutcome, CreatePortfolioUseCase};
pub use get_owner_portfolio::{GetOwnerPortfolioError, GetOwnerPortfolioUseCase, OwnerPortfolio};
pub use get_public_portfolio::{GetPublicPortfolioError, GetPublicPortfolioUseCase};
pub use publish_portfolio::{PublishPortfolioError, PublishPortfolioUseCase};
pub use save_portfolio::{SavePortfolioError, SavePortfolioUseCase};
