use actix_web::{post, HttpResponse};

use crate::{
    auth::AuthenticatedUser, constants::prompts::PLACEHOLDER_QUESTIONS,
    models::dto::GenerateQuestionsResponse,
};

/// Placeholder behind bearer authentication; does not call the model.
#[post("/generate-questions")]
pub async fn generate_questions(auth: AuthenticatedUser) -> HttpResponse {
    let user_id = auth.0.sub;
    log::info!("Serving placeholder questions for user {}", user_id);

    HttpResponse::Ok().json(GenerateQuestionsResponse {
        user_id,
        questions: PLACEHOLDER_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}
