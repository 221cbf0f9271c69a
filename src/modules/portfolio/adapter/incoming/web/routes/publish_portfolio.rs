use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::PublishPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    #[serde(alias = "isPublished")]
    pub is_published: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PublishResponse {
    pub is_published: bool,
}

/// Show or hide the caller's public portfolio page
#[utoipa::path(
    post,
    path = "/api/portfolio/publish",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Visibility updated", body = inline(SuccessResponse<PublishResponse>)),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No portfolio yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/portfolio/publish")]
pub async fn publish_portfolio_handler(
    user: AuthenticatedUser,
    req: web::Json<PublishRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .portfolio
        .publish
        .execute(user.user_id, req.is_published)
        .await
    {
        Ok(is_published) => ApiResponse::success(PublishResponse { is_published }),
        Err(PublishPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        Err(PublishPortfolioError::RepositoryError(e)) => {
            error!(owner = %user.user_id, error = %e, "Publishing portfolio failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::portfolio::application::services::PublishPortfolioService;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::tests::support::fakes::{record, InMemoryPortfolios};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    async fn call(store: InMemoryPortfolios, user_id: Uuid, payload: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_publish_portfolio(PublishPortfolioService::new(store))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .app_data(web::Data::new(token_provider()))
                .service(publish_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/portfolio/publish")
            .insert_header(("Authorization", bearer(user_id)))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_publish_accepts_camel_case_flag() {
        let user_id = Uuid::new_v4();
        let store = InMemoryPortfolios::with(record(UserId::from(user_id), json!([]), false));

        let (status, body) = call(store.clone(), user_id, json!({ "isPublished": true })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_published"], true);
        assert!(store.get(UserId::from(user_id)).unwrap().is_published);
    }

    #[actix_web::test]
    async fn test_non_boolean_flag_is_400() {
        let user_id = Uuid::new_v4();
        let store = InMemoryPortfolios::with(record(UserId::from(user_id), json!([]), false));

        let (status, body) = call(store, user_id, json!({ "is_published": "yes" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_without_portfolio_is_404() {
        let (status, _) = call(
            InMemoryPortfolios::default(),
            Uuid::new_v4(),
            json!({ "is_published": false }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
