pub mod health_handler;
pub mod page_handler;
pub mod question_handler;
pub mod review_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use page_handler::process_page;
pub use question_handler::generate_questions;
pub use review_handler::review_answer;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(process_page)
        .service(generate_questions)
        .service(review_answer)
        .service(health_check);
}

/// Body limit sized for whole HTML pages. Malformed or incomplete bodies
/// become JSON 400 responses instead of the framework's plain-text ones.
pub fn json_config(max_payload_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_bytes)
        .error_handler(|err, _req| AppError::RequestInvalid(err.to_string()).into())
}
