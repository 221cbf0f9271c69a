use actix_web::{get, http::header, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::modules::username::application::ports::incoming::use_cases::Availability;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckUsernameQuery {
    /// Candidate username; surrounding whitespace is ignored
    #[serde(default)]
    pub username: String,
}

/// Check whether a username is free
///
/// Always answers 200. Answers may be up to 15 seconds stale.
#[utoipa::path(
    get,
    path = "/api/username/check",
    tag = "username",
    params(CheckUsernameQuery),
    responses(
        (status = 200, description = "Availability answer", body = Availability,
            examples(
                ("Free" = (value = json!({ "available": true }))),
                ("Invalid" = (value = json!({ "available": false, "reason": "invalid" }))),
                ("Lookup failed" = (value = json!({ "available": false, "reason": "error" })))
            )
        ),
    )
)]
#[get("/api/username/check")]
pub async fn check_username_handler(
    query: web::Query<CheckUsernameQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let availability = data.username.check.execute(&query.username).await;

    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(availability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::modules::username::application::ports::incoming::use_cases::CheckUsernameAvailabilityUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct RecordingCheck {
        answer: Availability,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl CheckUsernameAvailabilityUseCase for RecordingCheck {
        async fn execute(&self, raw: &str) -> Availability {
            self.seen.lock().unwrap().push(raw.to_string());
            self.answer
        }
    }

    #[actix_web::test]
    async fn test_check_returns_answer_uncached() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = TestAppStateBuilder::default()
            .with_check_username(RecordingCheck {
                answer: Availability::known(true),
                seen: seen.clone(),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(check_username_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/username/check?username=ada_l")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "available": true }));
        assert_eq!(seen.lock().unwrap().as_slice(), ["ada_l"]);
    }

    #[actix_web::test]
    async fn test_missing_param_is_checked_as_empty() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = TestAppStateBuilder::default()
            .with_check_username(RecordingCheck {
                answer: Availability::invalid(),
                seen: seen.clone(),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(check_username_handler)).await;

        let req = test::TestRequest::get().uri("/api/username/check").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["available"], false);
        assert_eq!(body["reason"], "invalid");
        assert_eq!(seen.lock().unwrap().as_slice(), [""]);
    }
}
