use std::sync::Arc;

use actix_web::{dev::Payload, http::header::Header, web, FromRequest, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{claims::IdentityClaims, verifier::INVALID_TOKEN},
    errors::AppError,
};

/// Extractor for handlers that require a verified `Authorization: Bearer` token.
pub struct AuthenticatedUser(pub IdentityClaims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = Authorization::<Bearer>::parse(req)
            .map(|auth| auth.into_scheme().token().to_string());
        let verifier = req
            .app_data::<web::Data<AppState>>()
            .map(|state| Arc::clone(&state.identity_verifier));

        Box::pin(async move {
            let verifier = verifier.ok_or_else(|| {
                AppError::InternalError("Identity verifier not configured".to_string())
            })?;

            let token = token.map_err(|_| {
                log::info!("Request without a usable bearer token");
                AppError::AuthFailure(INVALID_TOKEN.to_string())
            })?;

            let claims = verifier.verify(&token).await?;
            Ok(AuthenticatedUser(claims))
        })
    }
}
