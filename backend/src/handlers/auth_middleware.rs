use axum::{
    extract::{FromRequestParts, State},
    http::{HeaderMap, Request, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    body::Body,
    Json,
};
use std::sync::Arc;
use crate::AppState;
use jsonwebtoken::{decode, DecodingKey, Validation, Algorithm};
use serde_json::json;

use crate::handlers::auth_dtos::Claims;

#[derive(Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
    pub is_admin: bool,
}

#[derive(Debug)]
pub struct AuthError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

fn decode_token(token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(
            std::env::var("JWT_SECRET_KEY")
                .expect("JWT_SECRET_KEY must be set in environment")
                .as_bytes(),
        ),
        &Validation::new(Algorithm::HS256),
    )
    .ok()
    .map(|data| data.claims)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

/// Optional identity for routes that work anonymously but persist results for
/// signed-in callers.
pub fn authenticate_from_headers(state: &Arc<AppState>, headers: &HeaderMap) -> Option<AuthUser> {
    let claims = bearer_token(headers).and_then(decode_token)?;
    let user = state.user_core.find_by_id(claims.sub).ok()??;
    let is_admin = state.user_core.is_admin(user.id).unwrap_or(false);
    Some(AuthUser {
        user_id: user.id,
        is_admin,
    })
}

pub async fn require_auth(
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers()).ok_or(AuthError {
        status: StatusCode::UNAUTHORIZED,
        message: "No authorization token provided".to_string(),
    })?;

    decode_token(token).ok_or(AuthError {
        status: StatusCode::UNAUTHORIZED,
        message: "Invalid token".to_string(),
    })?;

    Ok(next.run(request).await)
}

pub async fn require_admin(
    State(_state): State<Arc<AppState>>,
    auth_user: AuthUser,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    if !auth_user.is_admin {
        return Err(AuthError {
            status: StatusCode::FORBIDDEN,
            message: "Admin access required".to_string(),
        });
    }

    Ok(next.run(request).await)
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError {
            status: StatusCode::UNAUTHORIZED,
            message: "No authorization token provided".to_string(),
        })?;

        let claims = decode_token(token).ok_or(AuthError {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid token".to_string(),
        })?;

        let is_admin = state
            .user_core
            .is_admin(claims.sub)
            .map_err(|_| AuthError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to check admin status".to_string(),
            })?;

        Ok(AuthUser {
            user_id: claims.sub,
            is_admin,
        })
    }
}
