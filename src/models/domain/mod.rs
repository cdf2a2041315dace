pub mod generation;
pub mod questions;
pub mod role;
pub mod session;

pub use generation::{BlockThreshold, GenerationConfig, HarmCategory, SafetyThresholds};
pub use questions::{
    QuestionAnswer, QuestionSet, ReviewStatus, ReviewVerdict, ScrapedArticle, ScrapedContent,
};
pub use role::Role;
pub use session::{InvocationOverrides, ModelSession};
