use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use crate::handlers::auth_middleware::authenticate_from_headers;
use crate::models::scan_models::{NewScalpScan, ScalpAnalysis};
use crate::utils::images;

const SYSTEM_PROMPT: &str = r#"You are an expert AI dermatologist specializing in hair and scalp health analysis. Analyze the provided scalp/hair image and provide a comprehensive assessment.

Your response MUST be a valid JSON object with this exact structure:
{
  "healthScore": <number 0-100>,
  "conditions": [
    { "name": "<condition name>", "severity": "<mild|moderate|severe>", "description": "<brief description>" }
  ],
  "causes": [
    { "category": "<lifestyle|nutrition|genetics|hygiene|environmental>", "description": "<specific cause>" }
  ],
  "recommendations": [
    { "type": "<home_remedy|product|medical|lifestyle>", "title": "<short title>", "description": "<detailed recommendation>" }
  ],
  "hairCareRoutine": {
    "daily": ["<routine item 1>", "<routine item 2>"],
    "weekly": ["<routine item 1>", "<routine item 2>"],
    "monthly": ["<routine item 1>"]
  },
  "dosAndDonts": {
    "dos": ["<do item 1>", "<do item 2>", "<do item 3>"],
    "donts": ["<dont item 1>", "<dont item 2>", "<dont item 3>"]
  },
  "overallAssessment": "<2-3 sentence summary of overall scalp health>"
}

Analyze for: dandruff, dryness, oiliness, hair thinning, bald patches, scalp redness, fungal issues, hair breakage, and overall hair health.

Be thorough but concise. Only return the JSON object, no other text."#;

static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\n?|\n?```").unwrap());

/// Models wrap their JSON in markdown fences often enough that we strip them
/// before parsing.
pub fn strip_code_fences(content: &str) -> String {
    FENCE_RE.replace_all(content, "").trim().to_string()
}

/// Upstream 429 and 402 pass through with their specific messages; anything
/// else collapses to a generic failure.
pub fn map_gateway_status(status: u16) -> (StatusCode, &'static str) {
    match status {
        429 => (
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.",
        ),
        402 => (
            StatusCode::PAYMENT_REQUIRED,
            "AI credits exhausted. Please add credits to continue.",
        ),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze image"),
    }
}

fn gateway_url() -> String {
    std::env::var("AI_GATEWAY_URL")
        .unwrap_or_else(|_| "https://openrouter.ai/api/v1/chat/completions".to_string())
}

fn gateway_model() -> String {
    std::env::var("AI_MODEL").unwrap_or_else(|_| "google/gemini-2.5-flash".to_string())
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub image_base64: Option<String>,
}

#[derive(Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    choices: Vec<GatewayChoice>,
}

#[derive(Deserialize)]
struct GatewayChoice {
    message: GatewayMessage,
}

#[derive(Deserialize)]
struct GatewayMessage {
    content: Option<String>,
}

pub async fn analyze_scalp(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let image_base64 = match payload.image_base64 {
        Some(ref data) if !data.is_empty() => data,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "No image provided"})),
            ));
        }
    };

    // Validate before spending gateway credits on junk.
    let decoded = images::decode_data_url(image_base64).map_err(|message| {
        (StatusCode::BAD_REQUEST, Json(json!({"error": message})))
    })?;

    let api_key = std::env::var("AI_GATEWAY_API_KEY").map_err(|_| {
        tracing::error!("AI_GATEWAY_API_KEY is not configured");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "AI service not configured"})),
        )
    })?;

    tracing::info!("Starting scalp analysis");

    let body = json!({
        "model": gateway_model(),
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            {
                "role": "user",
                "content": [
                    { "type": "text", "text": "Please analyze this scalp/hair image and provide a detailed health assessment." },
                    { "type": "image_url", "image_url": { "url": image_base64 } }
                ]
            }
        ],
    });

    let client = reqwest::Client::new();
    let response = client
        .post(gateway_url())
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to reach AI gateway: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to analyze image"})),
            )
        })?;

    if !response.status().is_success() {
        let upstream = response.status().as_u16();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!("AI gateway error {}: {}", upstream, error_text);
        let (status, message) = map_gateway_status(upstream);
        return Err((status, Json(json!({"error": message}))));
    }

    let data: GatewayResponse = response.json().await.map_err(|e| {
        tracing::error!("Failed to read AI gateway response: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to analyze image"})),
        )
    })?;

    let content = data
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            tracing::error!("No content in AI response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "No analysis result received"})),
            )
        })?;

    let cleaned = strip_code_fences(&content);
    let mut analysis: ScalpAnalysis = serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!("Failed to parse AI response: {} ({})", e, cleaned);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to parse analysis result"})),
        )
    })?;
    analysis.health_score = analysis.health_score.clamp(0, 100);

    tracing::info!("Analysis complete, health score {}", analysis.health_score);

    let mut result = serde_json::to_value(&analysis).map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to parse analysis result"})),
        )
    })?;

    // Signed-in callers get their scan stored; the analysis still goes back
    // even if persistence hiccups.
    if let Some(auth_user) = authenticate_from_headers(&state, &headers) {
        match store_scan(&state, auth_user.user_id, &decoded, &analysis) {
            Ok(scan_id) => {
                if let Some(obj) = result.as_object_mut() {
                    obj.insert("scanId".to_string(), json!(scan_id));
                }
            }
            Err(e) => {
                tracing::error!("Failed to store scan for user {}: {}", auth_user.user_id, e);
            }
        }
    }

    Ok(Json(result))
}

fn store_scan(
    state: &Arc<AppState>,
    user_id: i32,
    decoded: &images::DecodedImage,
    analysis: &ScalpAnalysis,
) -> Result<i32, Box<dyn std::error::Error>> {
    let image_path = images::save_upload(&state.upload_dir, decoded)?;
    let created_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i32;
    let scan = state.scan_repository.insert_scan(NewScalpScan {
        user_id,
        created_at,
        health_score: analysis.health_score,
        image_path: Some(image_path),
        conditions: serde_json::to_string(&analysis.conditions)?,
        causes: serde_json::to_string(&analysis.causes)?,
        recommendations: serde_json::to_string(&analysis.recommendations)?,
        hair_care_routine: serde_json::to_string(&analysis.hair_care_routine)?,
        dos_and_donts: serde_json::to_string(&analysis.dos_and_donts)?,
        overall_assessment: analysis.overall_assessment.clone(),
    })?;
    scan.id.ok_or_else(|| "scan inserted without id".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences() {
        let fenced = "```json\n{\"healthScore\": 80}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"healthScore\": 80}");
    }

    #[test]
    fn strips_bare_fences_and_whitespace() {
        let fenced = "```\n{\"a\":1}\n```  ";
        assert_eq!(strip_code_fences(fenced), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn fenced_reply_parses_as_analysis() {
        let reply = "```json\n{\"healthScore\": 88, \"overallAssessment\": \"Healthy.\"}\n```";
        let analysis: ScalpAnalysis = serde_json::from_str(&strip_code_fences(reply)).unwrap();
        assert_eq!(analysis.health_score, 88);
        assert_eq!(analysis.overall_assessment, "Healthy.");
    }

    #[test]
    fn gateway_statuses_map_to_specific_errors() {
        let (status, message) = map_gateway_status(429);
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert!(message.contains("Rate limit"));

        let (status, message) = map_gateway_status(402);
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert!(message.contains("credits"));

        let (status, message) = map_gateway_status(503);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Failed to analyze image");
    }
}
