mod create_portfolio;
mod get_owner_portfolio;
mod get_public_portfolio;
mod publish_portfolio;
mod save_portfolio;

pub use create_portfolio::{create_portfolio_handler, __path_create_portfolio_handler, CreatePortfolioResponse};
pub use get_owner_portfolio::{get_owner_portfolio_handler, __path_get_owner_portfolio_handler, OwnerPortfolioResponse};
pub use get_public_portfolio::{get_public_portfolio_handler, __path_get_public_portfolio_handler, PublicPortfolioResponse};
pub use publish_portfolio::{publish_portfolio_handler, __path_publish_portfolio_handler, PublishRequest, PublishResponse};
pub use save_portfolio::{save_portfolio_handler, __path_save_portfolio_handler, SavedPortfolioResponse};
