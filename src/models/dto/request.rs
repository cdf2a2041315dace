use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProcessPageRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[validate(length(min = 1, message = "html must not be empty"))]
    pub html: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewAnswerRequest {
    #[validate(length(min = 1, max = 2000))]
    pub question: String,

    #[validate(length(min = 1, max = 10000))]
    pub expected_answer: String,

    #[validate(length(min = 1, max = 10000))]
    pub user_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_process_page_request() {
        let request: ProcessPageRequest = serde_json::from_str(
            r#"{"url": "http://example.com", "html": "<html><body></body></html>"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_process_page_request_missing_html_fails_to_parse() {
        let parsed = serde_json::from_str::<ProcessPageRequest>(r#"{"url": "http://example.com"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_process_page_request_empty_html_is_invalid() {
        let request = ProcessPageRequest {
            url: "http://example.com".to_string(),
            html: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_review_answer_request_requires_user_response() {
        let request = ReviewAnswerRequest {
            question: "What is the Example Domain for?".to_string(),
            expected_answer: "Illustrative examples in documents.".to_string(),
            user_response: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
