use std::sync::Arc;
use std::num::NonZeroU32;
use std::time::{SystemTime, UNIX_EPOCH};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use governor::{Quota, RateLimiter};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;
use crate::handlers::auth_handlers::is_valid_email;
use crate::models::scan_models::NewContactMessage;
use crate::utils::mailer;

#[derive(Deserialize, Clone)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ContactMessageResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub created_at: i32,
}

pub fn validate_contact(req: &ContactRequest) -> Result<(), &'static str> {
    if req.name.trim().is_empty()
        || req.subject.trim().is_empty()
        || req.message.trim().is_empty()
    {
        return Err("All fields are required");
    }
    if !is_valid_email(&req.email) {
        return Err("Invalid email address");
    }
    Ok(())
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(contact_req): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    // 3 submissions per hour per email
    let quota = Quota::per_hour(NonZeroU32::new(3).unwrap());
    let limiter_key = contact_req.email.to_lowercase();

    let entry = state.contact_limiter
        .entry(limiter_key.clone())
        .or_insert_with(|| RateLimiter::keyed(quota));
    let limiter = entry.value();

    if limiter.check_key(&limiter_key).is_err() {
        tracing::warn!("Rate limit exceeded for contact form");
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many messages. Please try again later."})),
        ));
    }
    drop(entry);

    if let Err(message) = validate_contact(&contact_req) {
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": message}))));
    }

    tracing::info!("Contact form submission received");

    let created_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i32;
    state.contact_repository.insert_message(NewContactMessage {
        name: contact_req.name.clone(),
        email: contact_req.email.clone(),
        subject: contact_req.subject.clone(),
        body: contact_req.message.clone(),
        created_at,
    }).map_err(|e| {
        tracing::error!("Database error while storing contact message: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Database error"})),
        )
    })?;

    let config = mailer::MailerConfig::from_env();

    let owner_html = mailer::owner_notification_html(
        &contact_req.name,
        &contact_req.email,
        &contact_req.subject,
        &contact_req.message,
    );
    mailer::send_email(
        &config,
        &config.inbox_address,
        &format!("[ScalpSense Contact] {}", contact_req.subject),
        &owner_html,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to send owner email: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "Failed to send message. Please try again later."})),
        )
    })?;

    // Confirmation back to the sender is best effort.
    let confirmation_html = mailer::confirmation_html(&contact_req.name, &contact_req.message);
    if let Err(e) = mailer::send_email(
        &config,
        &contact_req.email,
        "We received your message - ScalpSense",
        &confirmation_html,
    )
    .await
    {
        tracing::error!("Failed to send confirmation email: {}", e);
    } else {
        tracing::info!("Confirmation email sent");
    }

    Ok(Json(json!({"success": true, "message": "Emails sent successfully"})))
}

pub async fn list_contact_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContactMessageResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let messages = state.contact_repository.list_messages().map_err(|e| {
        tracing::error!("Database error while fetching contact messages: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Database error"})),
        )
    })?;
    Ok(Json(
        messages
            .into_iter()
            .map(|m| ContactMessageResponse {
                id: m.id.unwrap_or_default(),
                name: m.name,
                email: m.email,
                subject: m.subject,
                body: m.body,
                created_at: m.created_at,
            })
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Question".to_string(),
            message: "How accurate is the analysis?".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        assert!(validate_contact(&request()).is_ok());
    }

    #[test]
    fn rejects_blank_fields_and_bad_email() {
        let mut blank = request();
        blank.message = "   ".to_string();
        assert_eq!(validate_contact(&blank), Err("All fields are required"));

        let mut bad_email = request();
        bad_email.email = "not-an-email".to_string();
        assert_eq!(validate_contact(&bad_email), Err("Invalid email address"));
    }
}
