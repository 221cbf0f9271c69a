use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::PublicPortfolioView;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPublicPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PublicPortfolioResponse {
    #[serde(flatten)]
    pub portfolio: PublicPortfolioView,
    #[schema(example = "http://localhost:3000/ada_l")]
    pub canonical_url: String,
}

/// Public portfolio page data
///
/// Only published portfolios are visible. Unknown users, unpublished
/// portfolios and malformed usernames all answer the same 404.
#[utoipa::path(
    get,
    path = "/api/public/{username}",
    tag = "public",
    params(("username" = String, Path, description = "Portfolio owner's username")),
    responses(
        (status = 200, description = "Render-ready portfolio", body = inline(SuccessResponse<PublicPortfolioResponse>)),
        (status = 404, description = "Nothing published under this name", body = ErrorResponse,
            example = json!({ "success": false, "error": { "code": "NOT_FOUND", "message": "Not found" } })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/{username}")]
pub async fn get_public_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.portfolio.get_public.execute(&username).await {
        Ok(portfolio) => ApiResponse::success(PublicPortfolioResponse {
            canonical_url: format!("{}/{}", data.site_url, portfolio.username),
            portfolio,
        }),
        Err(GetPublicPortfolioError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Not found"),
        Err(GetPublicPortfolioError::RepositoryError(e)) => {
            error!(username = %username, error = %e, "Loading public portfolio failed");
            ApiResponse::internal_error()
        }
    }
}
