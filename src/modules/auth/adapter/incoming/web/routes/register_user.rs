use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{RegisterUserError, RegisteredUser};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Email address, stored lowercased
    #[schema(example = "ada@example.com")]
    pub email: String,

    /// Public handle, also the portfolio URL
    #[schema(example = "ada_l")]
    pub username: String,

    /// Password (8 to 72 characters)
    #[schema(example = "correct horse battery")]
    pub password: String,
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match err {
        RegisterUserError::Invalid(issues) => ApiResponse::validation_error(&issues),

        RegisterUserError::EmailAlreadyInUse => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already in use")
        }

        RegisterUserError::UsernameAlreadyInUse => {
            warn!(username = %req.username, "Username already registered");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }

        other => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %other,
                "User registration failed"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates an account. The username becomes the public portfolio URL.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<RegisteredUser>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "ada_l",
                    "email": "ada@example.com"
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid input",
                    "issues": [
                        { "path": "password", "message": "must be 8 to 72 characters" }
                    ]
                }
            })
        ),
        (
            status = 409,
            description = "Email or username already taken",
            body = ErrorResponse,
            examples(
                ("Email taken" = (value = json!({
                    "success": false,
                    "error": { "code": "EMAIL_TAKEN", "message": "Email already in use" }
                }))),
                ("Username taken" = (value = json!({
                    "success": false,
                    "error": { "code": "USERNAME_TAKEN", "message": "Username already taken" }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "User registration attempt");

    let result = data
        .register_user
        .execute(&req.email, &req.username, &req.password)
        .await;

    match result {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User created successfully");
            ApiResponse::created(user)
        }
        Err(e) => map_register_error(e, &req),
    }
}
