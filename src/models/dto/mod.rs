pub mod request;
pub mod response;

pub use request::{ProcessPageRequest, ReviewAnswerRequest};
pub use response::{GenerateQuestionsResponse, ProcessPageResponse, ReviewAnswerResponse};
