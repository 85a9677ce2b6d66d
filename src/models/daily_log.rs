use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One day's self-reported metrics. `date` is the unique key; the stores
/// guarantee at most one record per date. Field names serialize camelCase
/// to stay compatible with blobs written by earlier releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,

    /// 1 = awful, 5 = amazing.
    #[validate(range(min = 1, max = 5))]
    pub mood: Option<i32>,

    #[validate(range(min = 0.0))]
    pub sleep_hours: Option<f64>,

    #[validate(range(min = 1, max = 10))]
    pub sleep_quality: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub expense_amount: f64,

    /// Habit ids checked off for the day. A member may reference a habit
    /// that no longer exists in the catalog; that is not an error.
    #[serde(default)]
    pub completed_habits: BTreeSet<String>,

    #[serde(default)]
    pub notes: String,
}

impl DailyLog {
    /// Blank record for a date, ready for the tracker form to fill in.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            sleep_hours: None,
            sleep_quality: None,
            expense_amount: 0.0,
            completed_habits: BTreeSet::new(),
            notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut log = DailyLog::empty(date("2026-08-08"));
        log.mood = Some(4);
        log.sleep_hours = Some(7.5);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["date"], "2026-08-08");
        assert_eq!(json["sleepHours"], 7.5);
        assert!(json.get("completedHabits").is_some());
        assert!(json.get("sleep_hours").is_none());
    }

    #[test]
    fn test_deserializes_legacy_blob_shape() {
        let json = r#"{
            "date": "2026-08-01",
            "mood": 3,
            "sleepHours": 6.5,
            "sleepQuality": 7,
            "expenseAmount": 23.4,
            "completedHabits": ["h1", "h3"],
            "notes": "ok day"
        }"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.mood, Some(3));
        assert_eq!(log.completed_habits.len(), 2);
        assert!(log.completed_habits.contains("h3"));
    }

    #[test]
    fn test_null_metrics_deserialize_as_none() {
        let json = r#"{"date": "2026-08-01", "mood": null, "sleepHours": null, "sleepQuality": null}"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert!(log.mood.is_none());
        assert_eq!(log.expense_amount, 0.0);
        assert!(log.notes.is_empty());
    }

    #[test]
    fn test_mood_range_validates() {
        let mut log = DailyLog::empty(date("2026-08-08"));
        log.mood = Some(5);
        assert!(log.validate().is_ok());
        log.mood = Some(6);
        assert!(log.validate().is_err());
        log.mood = Some(0);
        assert!(log.validate().is_err());
    }

    #[test]
    fn test_absent_mood_is_valid() {
        let log = DailyLog::empty(date("2026-08-08"));
        assert!(log.validate().is_ok());
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut log = DailyLog::empty(date("2026-08-08"));
        log.sleep_hours = Some(-1.0);
        assert!(log.validate().is_err());

        let mut log = DailyLog::empty(date("2026-08-08"));
        log.expense_amount = -0.01;
        assert!(log.validate().is_err());
    }

    #[test]
    fn test_completed_habits_deduplicate() {
        let json = r#"{"date": "2026-08-01", "completedHabits": ["h1", "h1", "h2"]}"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.completed_habits.len(), 2);
    }
}
