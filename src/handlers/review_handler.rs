use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{ReviewAnswerRequest, ReviewAnswerResponse},
};

#[post("/review-answer")]
pub async fn review_answer(
    state: web::Data<AppState>,
    request: web::Json<ReviewAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let verdict = state.review_service.review_answer(&request).await?;
    Ok(HttpResponse::Ok().json(ReviewAnswerResponse::from(verdict)))
}
