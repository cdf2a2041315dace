use serde::{Deserialize, Serialize};

use crate::models::domain::{QuestionSet, ReviewStatus, ReviewVerdict, ScrapedContent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPageResponse {
    pub url: String,
    pub scraped_content: ScrapedContent,
    pub questions_answers: QuestionSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub user_id: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnswerResponse {
    pub status: ReviewStatus,
    pub explanation: String,
}

impl From<ReviewVerdict> for ReviewAnswerResponse {
    fn from(verdict: ReviewVerdict) -> Self {
        ReviewAnswerResponse {
            status: verdict.status,
            explanation: verdict.explanation,
        }
    }
}
