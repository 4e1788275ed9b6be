use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use std::time::{SystemTime, UNIX_EPOCH};
use serde_json::json;
use jsonwebtoken::{encode, Header, EncodingKey};
use chrono::{Duration, Utc};
use std::num::NonZeroU32;
use governor::{Quota, RateLimiter};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    handlers::auth_dtos::{LoginRequest, RegisterRequest},
    models::scan_models::NewUser,
    AppState,
};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn generate_token(user_id: i32) -> Result<String, (StatusCode, Json<serde_json::Value>)> {
    encode(
        &Header::default(),
        &json!({
            "sub": user_id,
            "exp": (Utc::now() + Duration::days(60)).timestamp(),
        }),
        &EncodingKey::from_secret(std::env::var("JWT_SECRET_KEY")
            .expect("JWT_SECRET_KEY must be set in environment")
            .as_bytes()),
    ).map_err(|_| (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Token generation failed"}))
    ))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(reg_req): Json<RegisterRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    if !is_valid_email(&reg_req.email) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid email format"}))
        ));
    }
    if reg_req.password.len() < 8 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Password must be 8+ characters" })),
        ));
    }
    if state.user_core.email_exists(&reg_req.email).map_err(|e| {
        tracing::error!("Database error while checking email: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Database error" }))
        )
    })? {
        return Err((
            StatusCode::CONFLICT,
            Json(json!({ "error": "Email already exists" })),
        ));
    }

    let password_hash = bcrypt::hash(&reg_req.password, bcrypt::DEFAULT_COST)
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Password hashing failed" })),
            )
        })?;

    let created_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i32;

    let user = state.user_core.create_user(NewUser {
        email: reg_req.email,
        password_hash,
        created_at,
    }).map_err(|e| {
        tracing::error!("Database error while creating user: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Database error" }))
        )
    })?;

    tracing::info!("Registered new user {}", user.id);
    let token = generate_token(user.id)?;
    Ok(Json(json!({ "token": token, "user_id": user.id })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(login_req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    // 5 attempts per minute per email
    let quota = Quota::per_minute(NonZeroU32::new(5).unwrap());
    let limiter_key = login_req.email.to_lowercase();

    let entry = state.login_limiter
        .entry(limiter_key.clone())
        .or_insert_with(|| RateLimiter::keyed(quota));
    let limiter = entry.value();

    if limiter.check_key(&limiter_key).is_err() {
        tracing::warn!("Rate limit exceeded for login attempt");
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many login attempts, try again later"})),
        ));
    }
    drop(entry);

    let user = match state.user_core.find_by_email(&login_req.email) {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid credentials"}))
            ));
        }
        Err(_) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Database error"}))
            ));
        }
    };

    match bcrypt::verify(&login_req.password, &user.password_hash) {
        Ok(true) => {
            let token = generate_token(user.id)?;
            Ok(Json(json!({ "token": token, "user_id": user.id })))
        }
        _ => {
            Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid credentials"}))
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_matches_obvious_cases() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }
}
