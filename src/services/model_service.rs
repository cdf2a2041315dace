use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{InvocationOverrides, ModelSession, Role},
    services::{
        model_client::{InvocationError, ModelClient},
        prompt_builder::PromptBuilder,
    },
};

const MAX_ATTEMPTS: u32 = 2;

/// Creates role sessions and invokes the model with a per-attempt deadline
/// and a single retry for transient failures.
pub struct ModelService {
    client: Arc<dyn ModelClient>,
    prompts: Arc<PromptBuilder>,
    model_name: String,
    attempt_timeout: Duration,
    retry_backoff: Duration,
}

impl ModelService {
    pub fn new(client: Arc<dyn ModelClient>, prompts: Arc<PromptBuilder>, config: &Config) -> Self {
        Self {
            client,
            prompts,
            model_name: config.model_name.clone(),
            attempt_timeout: config.model_timeout,
            retry_backoff: config.retry_backoff,
        }
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    pub fn create_session(&self, role: Role) -> ModelSession {
        ModelSession::new(
            self.model_name.clone(),
            role,
            self.prompts.get_instructions(role).to_vec(),
        )
    }

    pub async fn invoke(
        &self,
        session: &ModelSession,
        prompt: &str,
        overrides: Option<&InvocationOverrides>,
    ) -> AppResult<String> {
        let effective = match overrides {
            Some(overrides) => session.with_overrides(overrides),
            None => session.clone(),
        };

        let mut attempt = 1;
        loop {
            match self.attempt(&effective, prompt).await {
                Ok(reply) => {
                    log::debug!(
                        "Model reply for role {} ({} chars, attempt {})",
                        effective.role,
                        reply.len(),
                        attempt
                    );
                    return Ok(reply);
                }
                Err(err) if err.is_transient() && attempt < MAX_ATTEMPTS => {
                    log::warn!(
                        "Transient model failure for role {} on attempt {}: {}; retrying",
                        effective.role,
                        attempt,
                        err
                    );
                    attempt += 1;
                    if !self.retry_backoff.is_zero() {
                        tokio::time::sleep(self.retry_backoff).await;
                    }
                }
                Err(err) => {
                    log::error!(
                        "Model invocation failed for role {} after {} attempt(s): {}",
                        effective.role,
                        attempt,
                        err
                    );
                    return Err(err.into());
                }
            }
        }
    }

    async fn attempt(&self, session: &ModelSession, prompt: &str) -> Result<String, InvocationError> {
        tokio::time::timeout(self.attempt_timeout, self.client.generate(session, prompt))
            .await
            .unwrap_or(Err(InvocationError::Timeout(self.attempt_timeout)))
    }
}
