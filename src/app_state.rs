use std::{sync::Arc, time::Duration};

use crate::{
    auth::{GoogleTokenVerifier, IdentityVerifier, JwtVerifier},
    config::{Config, IdentityProvider},
    errors::{AppError, AppResult},
    services::{
        credentials, ModelClient, ModelService, PageService, PromptBuilder, ReviewService,
        RoleInstructions, VertexModelClient,
    },
};

const IDENTITY_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService>,
    pub review_service: Arc<ReviewService>,
    pub identity_verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Fails when no Google Cloud credential source is available.
    pub async fn new(config: Config) -> AppResult<Self> {
        let tokens = credentials::resolve(&config).await?;
        let model_client: Arc<dyn ModelClient> = Arc::new(VertexModelClient::new(&config, tokens)?);

        let identity_verifier: Arc<dyn IdentityVerifier> = match config.identity_provider {
            IdentityProvider::Google => {
                let http_client = reqwest::Client::builder()
                    .timeout(IDENTITY_PROVIDER_TIMEOUT)
                    .build()
                    .map_err(|e| {
                        AppError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
                    })?;
                Arc::new(GoogleTokenVerifier::new(
                    http_client,
                    config.google_client_id.clone(),
                ))
            }
            IdentityProvider::Jwt => Arc::new(JwtVerifier::new(&config.identity_jwt_secret)),
        };

        Self::with_components(
            config,
            model_client,
            identity_verifier,
            RoleInstructions::default(),
        )
    }

    /// Wires the services around the given collaborators.
    pub fn with_components(
        config: Config,
        model_client: Arc<dyn ModelClient>,
        identity_verifier: Arc<dyn IdentityVerifier>,
        instructions: RoleInstructions,
    ) -> AppResult<Self> {
        let prompts = Arc::new(PromptBuilder::new(instructions)?);
        let model_service = Arc::new(ModelService::new(model_client, prompts, &config));

        let page_service = Arc::new(PageService::new(
            Arc::clone(&model_service),
            config.request_timeout,
        ));
        let review_service = Arc::new(ReviewService::new(model_service));

        Ok(Self {
            page_service,
            review_service,
            identity_verifier,
        })
    }
}
