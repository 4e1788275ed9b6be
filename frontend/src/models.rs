use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Condition {
    pub name: String,
    pub severity: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Cause {
    pub category: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct HairCareRoutine {
    #[serde(default)]
    pub daily: Vec<String>,
    #[serde(default)]
    pub weekly: Vec<String>,
    #[serde(default)]
    pub monthly: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DosAndDonts {
    #[serde(default)]
    pub dos: Vec<String>,
    #[serde(default)]
    pub donts: Vec<String>,
}

/// Analysis as the analyze endpoint returns it (camelCase, straight from the
/// AI gateway). `scan_id` is present when the backend stored the scan.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
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
    #[serde(default)]
    pub scan_id: Option<i32>,
}

/// A stored scan from the dashboard listing (snake_case, DB shape).
#[derive(Deserialize, Clone, PartialEq)]
pub struct ScanRecord {
    pub id: i32,
    pub created_at: i32,
    pub health_score: i32,
    pub image_path: Option<String>,
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

impl From<ScanRecord> for ScalpAnalysis {
    fn from(scan: ScanRecord) -> Self {
        ScalpAnalysis {
            health_score: scan.health_score,
            conditions: scan.conditions,
            causes: scan.causes,
            recommendations: scan.recommendations,
            hair_care_routine: scan.hair_care_routine,
            dos_and_donts: scan.dos_and_donts,
            overall_assessment: scan.overall_assessment,
            scan_id: Some(scan.id),
        }
    }
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Trend {
    Up,
    Down,
    Same,
}

/// Trend arrow for the scan at `index` in a newest-first list, compared to
/// the scan right before it.
pub fn trend_at(scans: &[ScanRecord], index: usize) -> Option<Trend> {
    let current = scans.get(index)?.health_score;
    let previous = scans.get(index + 1)?.health_score;
    Some(if current > previous {
        Trend::Up
    } else if current < previous {
        Trend::Down
    } else {
        Trend::Same
    })
}

pub fn score_color(score: i32) -> &'static str {
    if score >= 80 {
        "#22c55e"
    } else if score >= 60 {
        "#eab308"
    } else if score >= 40 {
        "#f97316"
    } else {
        "#ef4444"
    }
}

pub fn severity_color(severity: &str) -> &'static str {
    match severity {
        "mild" => "#22c55e",
        "moderate" => "#eab308",
        "severe" => "#ef4444",
        _ => "#9ca3af",
    }
}

pub fn format_timestamp(timestamp: i32) -> String {
    match Utc.timestamp_opt(timestamp as i64, 0) {
        chrono::offset::LocalResult::Single(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        _ => "Unknown date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, score: i32) -> ScanRecord {
        ScanRecord {
            id,
            created_at: 1_700_000_000,
            health_score: score,
            image_path: None,
            conditions: Vec::new(),
            causes: Vec::new(),
            recommendations: Vec::new(),
            hair_care_routine: HairCareRoutine::default(),
            dos_and_donts: DosAndDonts::default(),
            overall_assessment: String::new(),
        }
    }

    #[test]
    fn trend_compares_against_the_previous_scan() {
        let scans = vec![record(3, 80), record(2, 70), record(1, 70)];
        assert_eq!(trend_at(&scans, 0), Some(Trend::Up));
        assert_eq!(trend_at(&scans, 1), Some(Trend::Same));
        assert_eq!(trend_at(&scans, 2), None); // oldest scan has no baseline
    }

    #[test]
    fn score_colors_follow_the_bands() {
        assert_eq!(score_color(80), "#22c55e");
        assert_eq!(score_color(79), "#eab308");
        assert_eq!(score_color(59), "#f97316");
        assert_eq!(score_color(39), "#ef4444");
    }

    #[test]
    fn severity_falls_back_to_neutral() {
        assert_eq!(severity_color("mild"), "#22c55e");
        assert_eq!(severity_color("unknown"), "#9ca3af");
    }

    #[test]
    fn analyze_response_with_scan_id_parses() {
        let raw = r#"{"healthScore": 70, "overallAssessment": "Fine.", "scanId": 12}"#;
        let analysis: ScalpAnalysis = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.scan_id, Some(12));

        let raw_anonymous = r#"{"healthScore": 70}"#;
        let analysis: ScalpAnalysis = serde_json::from_str(raw_anonymous).unwrap();
        assert_eq!(analysis.scan_id, None);
    }
}
