pub mod credentials;
pub mod model_client;
pub mod model_service;
pub mod page_service;
pub mod prompt_builder;
pub mod reply_parser;
pub mod review_service;

pub use credentials::AccessTokenSource;
pub use model_client::{InvocationError, ModelClient, VertexModelClient};
pub use model_service::ModelService;
pub use page_service::PageService;
pub use prompt_builder::{PromptBuilder, RoleInstructions};
pub use review_service::ReviewService;
