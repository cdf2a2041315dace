use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::{ReviewVerdict, Role},
        dto::ReviewAnswerRequest,
    },
    services::{model_service::ModelService, reply_parser},
};

pub struct ReviewService {
    model_service: Arc<ModelService>,
}

impl ReviewService {
    pub fn new(model_service: Arc<ModelService>) -> Self {
        Self { model_service }
    }

    pub async fn review_answer(&self, request: &ReviewAnswerRequest) -> AppResult<ReviewVerdict> {
        let reviewer = self.model_service.create_session(Role::AnswerReviewer);
        let prompt = self.model_service.prompts().review_prompt(
            &request.question,
            &request.expected_answer,
            &request.user_response,
        );

        let reply = self.model_service.invoke(&reviewer, &prompt, None).await?;
        let verdict = reply_parser::decode_review_verdict(&reply)?;

        log::info!("Reviewed answer with verdict {:?}", verdict.status);
        Ok(verdict)
    }
}
