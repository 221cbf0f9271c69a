use actix_web::{put, web, Responder};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::domain::{PageStyle, PortfolioDocument, Section};
use crate::modules::portfolio::application::ports::incoming::use_cases::SavePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SavedPortfolioResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub page: Option<PageStyle>,
    #[schema(value_type = Vec<Object>)]
    pub sections: Vec<Section>,
}

impl From<PortfolioDocument> for SavedPortfolioResponse {
    fn from(document: PortfolioDocument) -> Self {
        Self {
            page: document.page,
            sections: document.sections,
        }
    }
}

/// Replace the caller's portfolio document
///
/// The body must be `{ page?, sections }`. Positions are renumbered from
/// 0 in the order given by their current values; the stored result is
/// echoed back.
#[utoipa::path(
    put,
    path = "/api/portfolio/sections",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    request_body(content = Object, description = "`{ page?, sections }` document"),
    responses(
        (status = 200, description = "Saved document", body = inline(SuccessResponse<SavedPortfolioResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid input",
                    "issues": [
                        { "path": "sections[0].layout.w", "message": "must be greater than 0" }
                    ]
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No portfolio yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/portfolio/sections")]
pub async fn save_portfolio_handler(
    user: AuthenticatedUser,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.save.execute(user.user_id, &body).await {
        Ok(document) => ApiResponse::success(SavedPortfolioResponse::from(document)),
        Err(SavePortfolioError::Invalid(issues)) => ApiResponse::validation_error(&issues),
        Err(SavePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        Err(SavePortfolioError::RepositoryError(e)) => {
            error!(owner = %user.user_id, error = %e, "Saving portfolio failed");
            ApiResponse::internal_error()
        }
    }
}
