use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::username::application::ports::incoming::use_cases::UpdateUsernameError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUsernameRequest {
    #[schema(example = "grace_h")]
    pub username: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateUsernameResponse {
    #[schema(example = "grace_h")]
    pub username: String,
}

fn map_update_error(err: UpdateUsernameError) -> HttpResponse {
    match err {
        UpdateUsernameError::Invalid(issues) => ApiResponse::validation_error(&issues),
        UpdateUsernameError::UsernameAlreadyInUse => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username already in use")
        }
        UpdateUsernameError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateUsernameError::RepositoryError(e) => {
            error!(error = %e, "Username update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Change the caller's username
#[utoipa::path(
    patch,
    path = "/api/username",
    tag = "username",
    request_body = UpdateUsernameRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Username updated", body = inline(SuccessResponse<UpdateUsernameResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Username already in use", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "USERNAME_TAKEN", "message": "Username already in use" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/username")]
pub async fn update_username_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateUsernameRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.username.update.execute(user.user_id, &req.username).await {
        Ok(username) => ApiResponse::success(UpdateUsernameResponse { username }),
        Err(e) => map_update_error(e),
    }
}
