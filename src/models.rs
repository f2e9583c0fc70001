//! Frontend Models
//!
//! Data structures matching the report service payloads.

use serde::{Deserialize, Serialize};

/// One row of the meal editor (and of a create request)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub time: String,
    pub food: String,
}

impl MealEntry {
    pub fn new(time: impl Into<String>, food: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            food: food.into(),
        }
    }

    /// Both fields filled in
    pub fn is_complete(&self) -> bool {
        !self.time.is_empty() && !self.food.is_empty()
    }
}

/// Editable field of a meal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealField {
    Time,
    Food,
}

/// A scored meal inside a report (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMeal {
    pub time: String,
    pub food: String,
    pub quality_score: f64,
}

/// Daily nutrition report (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealReport {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub meals: Vec<ScoredMeal>,
    pub average_score: f64,
    #[serde(default)]
    pub message: String,
}

/// Aggregation period for the report list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportWindow {
    #[default]
    Weekly,
    Monthly,
}

impl ReportWindow {
    /// Value of the `type` query parameter
    pub fn query_value(self) -> &'static str {
        match self {
            ReportWindow::Weekly => "0",
            ReportWindow::Monthly => "1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportWindow::Weekly => "Weekly",
            ReportWindow::Monthly => "Monthly",
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            ReportWindow::Weekly => "Last 7 days",
            ReportWindow::Monthly => "Last 30 days",
        }
    }
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    AddMeal,
    Reports,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accepts_document_id() {
        let json = r#"{
            "_id": "65a1",
            "date": "2025-01-05T00:00:00.000Z",
            "meals": [{"time": "08:00 AM", "food": "Oatmeal", "qualityScore": 82}],
            "averageScore": 82,
            "message": "Great start"
        }"#;
        let report: MealReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.id, "65a1");
        assert_eq!(report.meals[0].quality_score, 82.0);
        assert_eq!(report.average_score, 82.0);
    }

    #[test]
    fn test_report_accepts_plain_id_and_missing_optionals() {
        let json = r#"{"id": "r-1", "date": "2025-01-05", "averageScore": 40.5}"#;
        let report: MealReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.id, "r-1");
        assert!(report.meals.is_empty());
        assert!(report.message.is_empty());
    }

    #[test]
    fn test_window_query_values() {
        assert_eq!(ReportWindow::Weekly.query_value(), "0");
        assert_eq!(ReportWindow::Monthly.query_value(), "1");
        assert_eq!(ReportWindow::Monthly.period_label(), "Last 30 days");
    }

    #[test]
    fn test_entry_completeness() {
        assert!(MealEntry::new("08:00 AM", "Eggs").is_complete());
        assert!(!MealEntry::new("", "Eggs").is_complete());
        assert!(!MealEntry::new("08:00 AM", "").is_complete());
    }
}
