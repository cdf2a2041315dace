use std::{sync::Arc, time::Duration};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Role,
        dto::{ProcessPageRequest, ProcessPageResponse},
    },
    services::{model_service::ModelService, reply_parser},
};

/// Runs the scrape → question generation pipeline for one page.
pub struct PageService {
    model_service: Arc<ModelService>,
    request_timeout: Duration,
}

impl PageService {
    pub fn new(model_service: Arc<ModelService>, request_timeout: Duration) -> Self {
        Self {
            model_service,
            request_timeout,
        }
    }

    pub async fn process_page(&self, request: ProcessPageRequest) -> AppResult<ProcessPageResponse> {
        tokio::time::timeout(self.request_timeout, self.run_stages(request))
            .await
            .map_err(|_| {
                AppError::UpstreamTimeout(format!(
                    "page processing exceeded {:?}",
                    self.request_timeout
                ))
            })?
    }

    async fn run_stages(&self, request: ProcessPageRequest) -> AppResult<ProcessPageResponse> {
        let ProcessPageRequest { url, html } = request;
        log::info!("Scraping page {} ({} bytes of HTML)", url, html.len());

        let scraper = self.model_service.create_session(Role::Scraper);
        let scrape_prompt = self.model_service.prompts().scrape_prompt(&html);
        let scraped_text = self
            .model_service
            .invoke(&scraper, &scrape_prompt, None)
            .await?;

        log::info!("Generating questions for {}", url);

        let question_creator = self.model_service.create_session(Role::QuestionCreator);
        let questions_prompt = self.model_service.prompts().questions_prompt(&scraped_text);
        let questions_reply = self
            .model_service
            .invoke(&question_creator, &questions_prompt, None)
            .await?;

        let questions_answers = reply_parser::decode_question_set(&questions_reply).map_err(|e| {
            log::error!("Discarding scrape result for {}: {}", url, e);
            e
        })?;

        log::info!(
            "Processed page {} with {} questions",
            url,
            questions_answers.len()
        );

        Ok(ProcessPageResponse {
            url,
            scraped_content: reply_parser::decode_scraped_content(&scraped_text),
            questions_answers,
        })
    }
}
