use std::sync::Arc;
use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::Response,
};
use serde::Serialize;
use serde_json::json;

use crate::AppState;
use crate::handlers::auth_middleware::AuthUser;
use crate::models::scan_models::ScalpScan;
use crate::utils::{images, report_pdf};

#[derive(Serialize)]
pub struct ScanResponse {
    pub id: i32,
    pub created_at: i32,
    pub health_score: i32,
    pub image_path: Option<String>,
    pub conditions: serde_json::Value,
    pub causes: serde_json::Value,
    pub recommendations: serde_json::Value,
    pub hair_care_routine: serde_json::Value,
    pub dos_and_donts: serde_json::Value,
    pub overall_assessment: String,
}

fn scan_to_response(scan: ScalpScan) -> ScanResponse {
    ScanResponse {
        id: scan.id.unwrap_or_default(),
        created_at: scan.created_at,
        health_score: scan.health_score,
        image_path: scan.image_path.map(|name| format!("/uploads/{}", name)),
        conditions: serde_json::from_str(&scan.conditions).unwrap_or_else(|_| json!([])),
        causes: serde_json::from_str(&scan.causes).unwrap_or_else(|_| json!([])),
        recommendations: serde_json::from_str(&scan.recommendations).unwrap_or_else(|_| json!([])),
        hair_care_routine: serde_json::from_str(&scan.hair_care_routine)
            .unwrap_or_else(|_| json!({})),
        dos_and_donts: serde_json::from_str(&scan.dos_and_donts).unwrap_or_else(|_| json!({})),
        overall_assessment: scan.overall_assessment,
    }
}

pub async fn list_scans(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
) -> Result<Json<Vec<ScanResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let scans = state
        .scan_repository
        .list_for_user(auth_user.user_id)
        .map_err(|e| {
            tracing::error!("Database error while fetching scans: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Database error"})),
            )
        })?;
    Ok(Json(scans.into_iter().map(scan_to_response).collect()))
}

pub async fn get_scan(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Path(scan_id): Path<i32>,
) -> Result<Json<ScanResponse>, (StatusCode, Json<serde_json::Value>)> {
    let scan = fetch_owned_scan(&state, scan_id, auth_user.user_id)?;
    Ok(Json(scan_to_response(scan)))
}

pub async fn delete_scan(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Path(scan_id): Path<i32>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let deleted = state
        .scan_repository
        .delete_for_user(scan_id, auth_user.user_id)
        .map_err(|e| {
            tracing::error!("Database error while deleting scan {}: {}", scan_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Database error"})),
            )
        })?;

    match deleted {
        Some(image_path) => {
            if let Some(file_name) = image_path {
                images::remove_upload(&state.upload_dir, &file_name);
            }
            Ok(Json(json!({"success": true})))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Scan not found"})),
        )),
    }
}

pub async fn download_scan_pdf(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Path(scan_id): Path<i32>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let scan = fetch_owned_scan(&state, scan_id, auth_user.user_id)?;
    let analysis = scan.to_analysis();
    let bytes = report_pdf::render_report(&analysis, scan.created_at as i64).map_err(|e| {
        tracing::error!("Failed to render PDF for scan {}: {}", scan_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to generate report"})),
        )
    })?;

    let file_name = report_pdf::report_file_name(scan.created_at as i64);
    Response::builder()
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        )
        .body(Body::from(bytes))
        .map_err(|e| {
            tracing::error!("Failed to build PDF response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to generate report"})),
            )
        })
}

fn fetch_owned_scan(
    state: &Arc<AppState>,
    scan_id: i32,
    user_id: i32,
) -> Result<ScalpScan, (StatusCode, Json<serde_json::Value>)> {
    state
        .scan_repository
        .get_for_user(scan_id, user_id)
        .map_err(|e| {
            tracing::error!("Database error while fetching scan {}: {}", scan_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Database error"})),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Scan not found"})),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_columns_and_prefixes_image_path() {
        let scan = ScalpScan {
            id: Some(7),
            user_id: 1,
            created_at: 1_700_000_000,
            health_score: 64,
            image_path: Some("abc123.png".to_string()),
            conditions: r#"[{"name":"Oily scalp","severity":"moderate","description":"Shiny roots."}]"#.to_string(),
            causes: "[]".to_string(),
            recommendations: "broken json".to_string(),
            hair_care_routine: r#"{"daily":[],"weekly":[],"monthly":[]}"#.to_string(),
            dos_and_donts: "{}".to_string(),
            overall_assessment: "Oily but manageable.".to_string(),
        };
        let response = scan_to_response(scan);
        assert_eq!(response.id, 7);
        assert_eq!(response.image_path.as_deref(), Some("/uploads/abc123.png"));
        assert_eq!(response.conditions[0]["name"], "Oily scalp");
        assert_eq!(response.recommendations, json!([])); // bad column degrades
    }
}
