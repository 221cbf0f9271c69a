pub mod modules;
pub use modules::auth;
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::RegisterUserService;
use crate::config::{load_dotenv, AppConfig};
use crate::modules::portfolio::adapter::outgoing::{
    PortfolioQueryPostgres, PortfolioRepositoryPostgres,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::services::{
    CreatePortfolioService, GetOwnerPortfolioService, GetPublicPortfolioService,
    PublishPortfolioService, SavePortfolioService,
};
use crate::modules::username::application::availability_cache::AvailabilityCache;
use crate::modules::username::application::services::{
    CheckUsernameAvailabilityService, UpdateUsernameService,
};
use crate::modules::username::application::username_use_cases::UsernameUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::clock::SystemClock;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub username: UsernameUseCases,
    pub portfolio: PortfolioUseCases,
    /// Base for canonical public page links, without trailing slash.
    pub site_url: String,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_dotenv();
    let config = AppConfig::from_env().context("loading server configuration")?;
    let jwt_config = JwtConfig::from_env().context("loading JWT configuration")?;

    let server_url = config.server_url();
    info!(%server_url, site_url = %config.site_url, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("connecting to the database")?;
    let db_arc = Arc::new(conn);

    // Adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(&db_arc));
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));

    let availability_cache = Arc::new(AvailabilityCache::new(
        Arc::new(SystemClock),
        chrono::Duration::milliseconds(config.username_cache_ttl_ms),
    ));

    let register_user = RegisterUserService::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::new(BcryptHasher::new()),
    );

    let username = UsernameUseCases {
        check: Arc::new(CheckUsernameAvailabilityService::new(
            user_query.clone(),
            availability_cache,
        )),
        update: Arc::new(UpdateUsernameService::new(user_query.clone(), user_repo)),
    };

    let portfolio = PortfolioUseCases {
        create: Arc::new(CreatePortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
        )),
        get_owned: Arc::new(GetOwnerPortfolioService::new(
            portfolio_query.clone(),
            user_query.clone(),
        )),
        save: Arc::new(SavePortfolioService::new(portfolio_repo.clone())),
        publish: Arc::new(PublishPortfolioService::new(portfolio_repo)),
        get_public: Arc::new(GetPublicPortfolioService::new(portfolio_query, user_query)),
    };

    let state = AppState {
        register_user: Arc::new(register_user),
        username,
        portfolio,
        site_url: config.site_url.clone(),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let db_for_server = Arc::clone(&db_arc);

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("binding {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::portfolio::adapter::incoming::web::routes as portfolio_routes;
    use crate::modules::username::adapter::incoming::web::routes as username_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    // Username
    cfg.service(username_routes::check_username_handler);
    cfg.service(username_routes::update_username_handler);
    // Portfolio
    cfg.service(portfolio_routes::create_portfolio_handler);
    cfg.service(portfolio_routes::get_owner_portfolio_handler);
    cfg.service(portfolio_routes::save_portfolio_handler);
    cfg.service(portfolio_routes::publish_portfolio_handler);
    // Public
    cfg.service(portfolio_routes::get_public_portfolio_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
