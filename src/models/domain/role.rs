use std::fmt;

use serde::{Deserialize, Serialize};

/// The persona a model session adopts. Each role selects its own
/// instruction set from [`RoleInstructions`](crate::services::prompt_builder::RoleInstructions).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "WebScraper", alias = "Scraper")]
    Scraper,
    QuestionCreator,
    AnswerReviewer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Scraper, Role::QuestionCreator, Role::AnswerReviewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Scraper => "WebScraper",
            Role::QuestionCreator => "QuestionCreator",
            Role::AnswerReviewer => "AnswerReviewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
