use std::collections::HashMap;

use regex::Regex;

use crate::{
    constants::prompts::{
        ANSWER_REVIEWER_INSTRUCTIONS, QUESTIONS_PROMPT_TEMPLATE, QUESTION_CREATOR_INSTRUCTIONS,
        REVIEW_PROMPT_TEMPLATE, SCRAPE_PROMPT_TEMPLATE, WEBSCRAPER_INSTRUCTIONS,
    },
    errors::{AppError, AppResult},
    models::domain::Role,
};

/// Immutable role → instruction table. Built once at start-up and shared
/// read-only; tests build their own instead of patching a global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleInstructions {
    table: HashMap<Role, Vec<String>>,
}

impl RoleInstructions {
    pub fn new(table: HashMap<Role, Vec<String>>) -> Self {
        Self { table }
    }

    pub fn with_role(mut self, role: Role, instructions: Vec<String>) -> Self {
        self.table.insert(role, instructions);
        self
    }

    /// A role missing from the table has no instructions.
    pub fn get_instructions(&self, role: Role) -> &[String] {
        self.table.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for RoleInstructions {
    fn default() -> Self {
        Self::new(HashMap::new())
            .with_role(Role::Scraper, vec![WEBSCRAPER_INSTRUCTIONS.to_string()])
            .with_role(
                Role::QuestionCreator,
                vec![QUESTION_CREATOR_INSTRUCTIONS.to_string()],
            )
            .with_role(
                Role::AnswerReviewer,
                vec![ANSWER_REVIEWER_INSTRUCTIONS.to_string()],
            )
    }
}

pub struct PromptBuilder {
    instructions: RoleInstructions,
    placeholder: Regex,
}

impl PromptBuilder {
    pub fn new(instructions: RoleInstructions) -> AppResult<Self> {
        let placeholder = Regex::new(r"\{([a-z_]+)\}")
            .map_err(|e| AppError::InternalError(format!("Invalid placeholder pattern: {}", e)))?;

        Ok(Self {
            instructions,
            placeholder,
        })
    }

    pub fn get_instructions(&self, role: Role) -> &[String] {
        self.instructions.get_instructions(role)
    }

    pub fn scrape_prompt(&self, html: &str) -> String {
        self.render(SCRAPE_PROMPT_TEMPLATE, &[("html", html)])
    }

    pub fn questions_prompt(&self, text: &str) -> String {
        self.render(QUESTIONS_PROMPT_TEMPLATE, &[("text", text)])
    }

    pub fn review_prompt(&self, question: &str, expected_answer: &str, user_response: &str) -> String {
        self.render(
            REVIEW_PROMPT_TEMPLATE,
            &[
                ("question", question),
                ("expected_answer", expected_answer),
                ("user_response", user_response),
            ],
        )
    }

    /// Substitutes placeholders in a single pass over the template, so
    /// caller text that happens to contain `{name}` is left alone.
    fn render(&self, template: &str, values: &[(&str, &str)]) -> String {
        self.placeholder
            .replace_all(template, |caps: &regex::Captures<'_>| {
                let name = &caps[1];
                values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
