use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::users;
use crate::schema::scalp_scans;
use crate::schema::contact_messages;

#[derive(Queryable, Selectable, Insertable, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub created_at: i32, // unix seconds
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub created_at: i32,
}

#[derive(Queryable, Selectable, Insertable, Clone)]
#[diesel(table_name = scalp_scans)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScalpScan {
    pub id: Option<i32>,
    pub user_id: i32,
    pub created_at: i32,
    pub health_score: i32,
    pub image_path: Option<String>, // relative path under the uploads dir
    pub conditions: String,         // JSON array
    pub causes: String,             // JSON array
    pub recommendations: String,    // JSON array
    pub hair_care_routine: String,  // JSON object {daily, weekly, monthly}
    pub dos_and_donts: String,      // JSON object {dos, donts}
    pub overall_assessment: String,
}

#[derive(Insertable)]
#[diesel(table_name = scalp_scans)]
pub struct NewScalpScan {
    pub user_id: i32,
    pub created_at: i32,
    pub health_score: i32,
    pub image_path: Option<String>,
    pub conditions: String,
    pub causes: String,
    pub recommendations: String,
    pub hair_care_routine: String,
    pub dos_and_donts: String,
    pub overall_assessment: String,
}

#[derive(Queryable, Selectable, Insertable, Clone)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactMessage {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub created_at: i32,
}

#[derive(Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub created_at: i32,
}

// Wire types for the analysis the AI gateway returns. Field names follow the
// gateway's camelCase JSON so they round-trip through serde untouched.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub name: String,
    pub severity: String, // "mild" | "moderate" | "severe"
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cause {
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String, // "home_remedy" | "product" | "medical" | "lifestyle"
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HairCareRoutine {
    #[serde(default)]
    pub daily: Vec<String>,
    #[serde(default)]
    pub weekly: Vec<String>,
    #[serde(default)]
    pub monthly: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DosAndDonts {
    #[serde(default)]
    pub dos: Vec<String>,
    #[serde(default)]
    pub donts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScalpAnalysis {
    pub health_score: i32,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub causes: Vec<Cause>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub hair_care_routine: HairCareRoutine,
    #[serde(default)]
    pub dos_and_donts: DosAndDonts,
    #[serde(default)]
    pub overall_assessment: String,
}

impl ScalpScan {
    /// Rebuild the analysis from the stored JSON columns. Columns that fail
    /// to parse fall back to empty sections, same as the dashboard treats
    /// missing data.
    pub fn to_analysis(&self) -> ScalpAnalysis {
        ScalpAnalysis {
            health_score: self.health_score,
            conditions: serde_json::from_str(&self.conditions).unwrap_or_default(),
            causes: serde_json::from_str(&self.causes).unwrap_or_default(),
            recommendations: serde_json::from_str(&self.recommendations).unwrap_or_default(),
            hair_care_routine: serde_json::from_str(&self.hair_care_routine).unwrap_or_default(),
            dos_and_donts: serde_json::from_str(&self.dos_and_donts).unwrap_or_default(),
            overall_assessment: self.overall_assessment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_parses_gateway_shape() {
        let raw = r#"{
            "healthScore": 72,
            "conditions": [
                {"name": "Dandruff", "severity": "mild", "description": "Light flaking near the crown."}
            ],
            "causes": [
                {"category": "lifestyle", "description": "Infrequent washing."}
            ],
            "recommendations": [
                {"type": "home_remedy", "title": "Tea tree rinse", "description": "Use twice a week."}
            ],
            "hairCareRoutine": {"daily": ["Brush gently"], "weekly": ["Deep condition"], "monthly": ["Trim ends"]},
            "dosAndDonts": {"dos": ["Stay hydrated"], "donts": ["Avoid hot water"]},
            "overallAssessment": "Generally healthy scalp with mild dandruff."
        }"#;
        let analysis: ScalpAnalysis = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.health_score, 72);
        assert_eq!(analysis.conditions[0].severity, "mild");
        assert_eq!(analysis.recommendations[0].kind, "home_remedy");
        assert_eq!(analysis.hair_care_routine.weekly, vec!["Deep condition"]);
    }

    #[test]
    fn analysis_tolerates_missing_sections() {
        let analysis: ScalpAnalysis = serde_json::from_str(r#"{"healthScore": 55}"#).unwrap();
        assert_eq!(analysis.health_score, 55);
        assert!(analysis.conditions.is_empty());
        assert!(analysis.overall_assessment.is_empty());
    }

    #[test]
    fn stored_scan_rebuilds_analysis() {
        let scan = ScalpScan {
            id: Some(1),
            user_id: 1,
            created_at: 1_700_000_000,
            health_score: 80,
            image_path: None,
            conditions: r#"[{"name":"Dryness","severity":"moderate","description":"Flaky patches."}]"#.to_string(),
            causes: "not json".to_string(),
            recommendations: "[]".to_string(),
            hair_care_routine: r#"{"daily":["Oil massage"]}"#.to_string(),
            dos_and_donts: "{}".to_string(),
            overall_assessment: "Dry but improving.".to_string(),
        };
        let analysis = scan.to_analysis();
        assert_eq!(analysis.conditions.len(), 1);
        assert!(analysis.causes.is_empty()); // bad column degrades to empty
        assert_eq!(analysis.hair_care_routine.daily, vec!["Oil massage"]);
    }
}
