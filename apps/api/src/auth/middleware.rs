use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use uuid::Uuid;

use super::claims::{UserClaims, UserContext};
use crate::errors::AppError;
use crate::state::AppState;

/// Verifies the `Authorization: Bearer <token>` header and injects a
/// [`UserContext`] extension for downstream handlers.
///
/// A missing header, malformed header, expired or forged token, or a
/// subject that is not a UUID all reject the request before any data
/// access occurs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = auth_header
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let key = DecodingKey::from_secret(state.config.jwt_secret.as_bytes());
    let token_data = decode::<UserClaims>(token, &key, &Validation::default())
        .map_err(|_| AppError::Unauthorized)?;

    let user_id =
        Uuid::parse_str(&token_data.claims.sub).map_err(|_| AppError::Unauthorized)?;

    request.extensions_mut().insert(UserContext { user_id });
    Ok(next.run(request).await)
}
