#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        auth::verifier::MockIdentityVerifier,
        config::Config,
        services::{model_client::MockModelClient, RoleInstructions},
    };

    pub const EXAMPLE_URL: &str = "http://example.com";
    pub const EXAMPLE_HTML: &str =
        "<html><body><h1>Example Article</h1><p>This is an example.</p></body></html>";
    pub const EXAMPLE_SCRAPED: &str = "Example Article: This is an example.";
    pub const EXAMPLE_QUESTIONS: &str =
        r#"{"question_1":{"question":"What is the article about?","answer":"An example."}}"#;

    /// Application state around mocked collaborators.
    pub fn test_state(client: MockModelClient, verifier: MockIdentityVerifier) -> AppState {
        AppState::with_components(
            Config::test_config(),
            Arc::new(client),
            Arc::new(verifier),
            RoleInstructions::default(),
        )
        .expect("test state should build")
    }

    pub fn example_body() -> serde_json::Value {
        serde_json::json!({ "url": EXAMPLE_URL, "html": EXAMPLE_HTML })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_example_body() {
        let body = example_body();
        assert_eq!(body["url"], EXAMPLE_URL);
        assert_eq!(body["html"], EXAMPLE_HTML);
    }

    #[test]
    fn test_fixtures_example_questions_are_json() {
        let parsed: serde_json::Value = serde_json::from_str(EXAMPLE_QUESTIONS).unwrap();
        assert!(parsed.get("question_1").is_some());
    }
}
