use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Article extracted by the scraper role, when the model answers with the
/// documented object instead of free text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedArticle {
    pub article_name: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapedContent {
    Article(ScrapedArticle),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// `{"question_1": {"question": .., "answer": ..}, ..}` as produced by the
/// question creator role. Keys keep the order the model wrote them in.
pub type QuestionSet = IndexMap<String, QuestionAnswer>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewVerdict {
    pub status: ReviewStatus,
    pub explanation: String,
}
