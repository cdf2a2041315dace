use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuestionSet, ReviewStatus, ReviewVerdict, ScrapedArticle, ScrapedContent},
};

static CODE_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*(.*?)\s*```\s*$")
        .expect("CODE_FENCE_REGEX is a valid regex pattern")
});

static QUESTION_KEY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^question_[0-9]+$").expect("QUESTION_KEY_REGEX is a valid regex pattern")
});

/// Models often wrap JSON in a Markdown fence despite being told not to.
pub fn strip_code_fences(reply: &str) -> &str {
    match CODE_FENCE_REGEX.captures(reply).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str(),
        None => reply.trim(),
    }
}

/// The scraper stage never fails on shape: a reply that is not the
/// documented object is kept verbatim as text.
pub fn decode_scraped_content(reply: &str) -> ScrapedContent {
    match serde_json::from_str::<ScrapedArticle>(strip_code_fences(reply)) {
        Ok(article) => ScrapedContent::Article(article),
        Err(_) => ScrapedContent::Text(reply.to_string()),
    }
}

pub fn decode_question_set(reply: &str) -> AppResult<QuestionSet> {
    let questions: QuestionSet = serde_json::from_str(strip_code_fences(reply)).map_err(|e| {
        AppError::DecodeFailure(format!("questions and answers: {}", e))
    })?;

    if questions.is_empty() {
        return Err(AppError::DecodeFailure(
            "questions and answers: reply contained no questions".to_string(),
        ));
    }

    if let Some(key) = questions.keys().find(|k| !QUESTION_KEY_REGEX.is_match(k)) {
        return Err(AppError::DecodeFailure(format!(
            "questions and answers: unexpected key '{}'",
            key
        )));
    }

    Ok(questions)
}

#[derive(Deserialize)]
struct RawVerdict {
    status: String,
    explanation: String,
}

pub fn decode_review_verdict(reply: &str) -> AppResult<ReviewVerdict> {
    let raw: RawVerdict = serde_json::from_str(strip_code_fences(reply))
        .map_err(|e| AppError::DecodeFailure(format!("review verdict: {}", e)))?;

    let status = match raw.status.trim().to_ascii_uppercase().as_str() {
        "PASS" => ReviewStatus::Pass,
        "FAIL" => ReviewStatus::Fail,
        other => {
            return Err(AppError::DecodeFailure(format!(
                "review verdict: unknown status '{}'",
                other
            )))
        }
    };

    Ok(ReviewVerdict {
        status,
        explanation: raw.explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuestionAnswer;

    #[test]
    fn strip_code_fences_removes_json_fence() {
        let reply = "```json\n{\"a\": 1}\n```\n";
        assert_eq!(strip_code_fences(reply), "{\"a\": 1}");
    }

    #[test]
    fn strip_code_fences_leaves_plain_text() {
        assert_eq!(strip_code_fences("  plain text \n"), "plain text");
    }

    #[test]
    fn scraped_plain_text_is_kept_verbatim() {
        let content = decode_scraped_content("Example Article: This is an example.");
        assert_eq!(
            content,
            ScrapedContent::Text("Example Article: This is an example.".to_string())
        );
    }

    #[test]
    fn scraped_article_object_is_decoded() {
        let content = decode_scraped_content(
            "```json\n{\"article_name\": \"Example Article\", \"content\": \"This is an example.\"}\n```",
        );
        assert!(matches!(content, ScrapedContent::Article(ref a) if a.article_name == "Example Article"));
    }

    #[test]
    fn question_set_decodes_documented_schema() {
        let reply = r#"{"question_1":{"question":"What is the article about?","answer":"An example."}}"#;
        let questions = decode_question_set(reply).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions["question_1"],
            QuestionAnswer {
                question: "What is the article about?".to_string(),
                answer: "An example.".to_string(),
            }
        );
    }

    #[test]
    fn question_set_rejects_free_text() {
        let result = decode_question_set("1. What is the article about? An example.");
        match result {
            Err(err @ AppError::DecodeFailure(_)) => {
                let message = err.to_string();
                assert!(message.starts_with("Failed to decode model reply: questions and answers:"));
                assert_eq!(message.matches("decode").count(), 1);
            }
            other => panic!("Expected DecodeFailure, got {:?}", other),
        }
    }

    #[test]
    fn question_set_keeps_reply_order_past_nine_questions() {
        let reply = serde_json::to_string(
            &(1..=12)
                .map(|n| {
                    (
                        format!("question_{}", n),
                        QuestionAnswer {
                            question: format!("Question {}?", n),
                            answer: format!("Answer {}.", n),
                        },
                    )
                })
                .collect::<QuestionSet>(),
        )
        .unwrap();

        let questions = decode_question_set(&reply).unwrap();
        let keys: Vec<&str> = questions.keys().map(String::as_str).collect();
        assert_eq!(keys[1], "question_2");
        assert_eq!(keys[9], "question_10");

        let serialized = serde_json::to_string(&questions).unwrap();
        let position = |key: &str| serialized.find(&format!("\"{}\"", key)).unwrap();
        assert!(position("question_2") < position("question_10"));
        assert!(position("question_9") < position("question_10"));
        assert!(position("question_10") < position("question_11"));
    }

    #[test]
    fn question_set_rejects_empty_object_and_unexpected_keys() {
        assert!(matches!(decode_question_set("{}"), Err(AppError::DecodeFailure(_))));

        let reply = r#"{"quiz":{"question":"q","answer":"a"}}"#;
        assert!(matches!(decode_question_set(reply), Err(AppError::DecodeFailure(_))));
    }

    #[test]
    fn review_verdict_accepts_lowercase_status() {
        let verdict =
            decode_review_verdict(r#"{"status": "pass", "explanation": "Great job!"}"#).unwrap();
        assert_eq!(verdict.status, ReviewStatus::Pass);
        assert_eq!(verdict.explanation, "Great job!");
    }

    #[test]
    fn review_verdict_rejects_unknown_status() {
        let result = decode_review_verdict(r#"{"status": "PARTIAL", "explanation": "Hmm"}"#);
        assert!(matches!(result, Err(AppError::DecodeFailure(_))));
    }
}
