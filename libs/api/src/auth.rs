use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{
    errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{ApiError, ApiState};

/// Identity carried by the bearer token. `sub` is the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

impl Claims {
    pub fn encode(&self, secret: &str) -> anyhow::Result<String> {
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?)
    }

    pub fn decode(token: &str, secret: &str) -> Result<Self, ApiError> {
        let validation = Validation::new(Algorithm::HS256);

        match jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(ApiError::from("401-003")),
                _ => Err(ApiError::from("401-002")),
            },
        }
    }
}

pub async fn auth(
    State(state): State<Arc<ApiState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Err(ApiError::from("401-001"));
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return Err(ApiError::from("401-002"));
    };

    let claims = Claims::decode(token.trim(), &state.jwt_secret)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
