use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::RegisterUserRequest;
use crate::auth::application::ports::incoming::use_cases::RegisteredUser;
use crate::modules::portfolio::adapter::incoming::web::routes::{
    CreatePortfolioResponse, OwnerPortfolioResponse, PublicPortfolioResponse, PublishRequest,
    PublishResponse, SavedPortfolioResponse,
};
use crate::modules::portfolio::application::domain::PublicPortfolioView;
use crate::modules::username::adapter::incoming::web::routes::{
    UpdateUsernameRequest, UpdateUsernameResponse,
};
use crate::modules::username::application::ports::incoming::use_cases::{
    Availability, UnavailableReason,
};
use crate::shared::validation::ValidationIssue;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Builder API",
        version = "1.0.0",
        description = "Build, publish and serve single-page portfolios"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,

        // Username endpoints
        crate::modules::username::adapter::incoming::web::routes::check_username_handler,
        crate::modules::username::adapter::incoming::web::routes::update_username_handler,

        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::create_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_owner_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::save_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::publish_portfolio_handler,

        // Public endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_portfolio_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            ValidationIssue,

            // Auth DTOs
            RegisterUserRequest,
            RegisteredUser,

            // Username DTOs
            Availability,
            UnavailableReason,
            UpdateUsernameRequest,
            UpdateUsernameResponse,

            // Portfolio DTOs
            CreatePortfolioResponse,
            OwnerPortfolioResponse,
            SavedPortfolioResponse,
            PublishRequest,
            PublishResponse,
            PublicPortfolioView,
            PublicPortfolioResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Account registration"),
        (name = "username", description = "Username availability and changes"),
        (name = "portfolio", description = "Portfolio editing for the signed-in owner"),
        (name = "public", description = "Published portfolio pages"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the identity service"))
                        .build(),
                ),
            )
        }
    }
}
