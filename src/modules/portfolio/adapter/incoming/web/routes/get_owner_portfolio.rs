use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::domain::{PageStyle, Section};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetOwnerPortfolioError, OwnerPortfolio,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnerPortfolioResponse {
    pub id: Uuid,
    #[schema(example = "ada_l")]
    pub username: String,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub page: Option<PageStyle>,
    /// Sorted by position, numbered from 0
    #[schema(value_type = Vec<Object>)]
    pub sections: Vec<Section>,
}

impl From<OwnerPortfolio> for OwnerPortfolioResponse {
    fn from(portfolio: OwnerPortfolio) -> Self {
        Self {
            id: portfolio.id,
            username: portfolio.username,
            is_published: portfolio.is_published,
            updated_at: portfolio.updated_at,
            page: portfolio.document.page,
            sections: portfolio.document.sections,
        }
    }
}

/// Load the caller's portfolio for editing
///
/// Older portfolios stored as a bare section list are returned in the
/// current `{ page?, sections }` shape.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's portfolio", body = inline(SuccessResponse<OwnerPortfolioResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No portfolio yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_owner_portfolio_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.get_owned.execute(user.user_id).await {
        Ok(portfolio) => ApiResponse::success(OwnerPortfolioResponse::from(portfolio)),
        Err(GetOwnerPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        Err(GetOwnerPortfolioError::RepositoryError(e)) => {
            error!(owner = %user.user_id, error = %e, "Loading portfolio failed");
            ApiResponse::internal_error()
        }
    }
}
