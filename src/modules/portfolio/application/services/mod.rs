mod create_portfolio_service;
mod get_owner_portfolio_service;
mod get_public_portfolio_service;
mod publish_portfolio_service;
mod save_portfolio_service;

pub use create_portfolio_service::CreatePortfolioService;
pub use get_owner_portfolio_service::GetOwnerPortfolioService;
pub use get_public_portfolio_service::GetPublicPortfolioService;
pub use publish_portfolio_service::PublishPortfolioService;
pub use save_portfolio_service::SavePortfolioService;
