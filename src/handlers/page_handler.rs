use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::ProcessPageRequest};

/// Scrapes the posted HTML and returns generated comprehension questions.
#[post("/process-page")]
pub async fn process_page(
    state: web::Data<AppState>,
    request: web::Json<ProcessPageRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.page_service.process_page(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::verifier::MockIdentityVerifier,
        handlers::json_config,
        models::domain::Role,
        services::model_client::{InvocationError, MockModelClient},
        test_utils::{fixtures::*, test_helpers::assert_error_status},
    };
    use actix_web::{http::StatusCode, test, App};

    fn scripted_client(questions_reply: &'static str) -> MockModelClient {
        let mut client = MockModelClient::new();
        client
            .expect_generate()
            .withf(|session, _| session.role == Role::Scraper)
            .returning(|_, _| Ok(EXAMPLE_SCRAPED.to_string()));
        client
            .expect_generate()
            .withf(|session, _| session.role == Role::QuestionCreator)
            .returning(move |_, _| Ok(questions_reply.to_string()));
        client
    }

    #[actix_web::test]
    async fn test_process_page_returns_combined_result() {
        let state = test_state(scripted_client(EXAMPLE_QUESTIONS), MockIdentityVerifier::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config(1024 * 1024))
                .service(process_page),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/process-page")
            .set_json(example_body())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            serde_json::json!({
                "url": "http://example.com",
                "scraped_content": "Example Article: This is an example.",
                "questions_answers": {
                    "question_1": {
                        "question": "What is the article about?",
                        "answer": "An example."
                    }
                }
            })
        );
    }

    #[actix_web::test]
    async fn test_process_page_decode_failure_omits_scraped_content() {
        let state = test_state(scripted_client("not json at all"), MockIdentityVerifier::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config(1024 * 1024))
                .service(process_page),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/process-page")
            .set_json(example_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "DECODE_FAILURE");
        assert!(body.get("error").is_some());
        assert!(body.get("scraped_content").is_none());
    }

    #[actix_web::test]
    async fn test_process_page_missing_field_is_bad_request() {
        let state = test_state(MockModelClient::new(), MockIdentityVerifier::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config(1024 * 1024))
                .service(process_page),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/process-page")
            .set_json(serde_json::json!({ "url": EXAMPLE_URL }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "REQUEST_INVALID");
    }

    #[actix_web::test]
    async fn test_process_page_empty_html_is_bad_request() {
        let state = test_state(MockModelClient::new(), MockIdentityVerifier::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config(1024 * 1024))
                .service(process_page),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/process-page")
            .set_json(serde_json::json!({ "url": EXAMPLE_URL, "html": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_process_page_upstream_failure_is_server_error() {
        let mut client = MockModelClient::new();
        client
            .expect_generate()
            .returning(|_, _| Err(InvocationError::Network("connection refused".into())));
        let state = test_state(client, MockIdentityVerifier::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config(1024 * 1024))
                .service(process_page),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/process-page")
            .set_json(example_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "UPSTREAM_FAILURE");
    }
}
