use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::CreatePortfolioOutcome;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePortfolioResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub portfolio_id: Uuid,
}

/// Create the caller's portfolio
///
/// Seeds hero, about, skills, projects and contact sections. Calling it
/// again is harmless and returns the existing portfolio id.
#[utoipa::path(
    post,
    path = "/api/portfolio",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Portfolio created", body = inline(SuccessResponse<CreatePortfolioResponse>)),
        (status = 200, description = "Portfolio already existed", body = inline(SuccessResponse<CreatePortfolioResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/portfolio")]
pub async fn create_portfolio_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.create.execute(user.user_id).await {
        Ok(CreatePortfolioOutcome::Created(id)) => {
            ApiResponse::created(CreatePortfolioResponse { portfolio_id: id })
        }
        Ok(CreatePortfolioOutcome::AlreadyExists(id)) => {
            ApiResponse::success(CreatePortfolioResponse { portfolio_id: id })
        }
        Err(e) => {
            error!(owner = %user.user_id, error = %e, "Portfolio creation failed");
            ApiResponse::internal_error()
        }
    }
}
