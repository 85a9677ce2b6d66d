//! Pure, stateless aggregation over daily log snapshots. Nothing in here
//! touches a store: every function takes a slice, clones what it needs,
//! and never mutates its input.

use chrono::NaiveDate;

use crate::models::DailyLog;

/// Numeric field selector for [`average`] and [`sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogField {
    Mood,
    SleepHours,
    SleepQuality,
    ExpenseAmount,
}

impl LogField {
    /// `None` when the record did not report this field. Expenses default
    /// to zero at the model level, so they are always present.
    pub fn extract(&self, log: &DailyLog) -> Option<f64> {
        match self {
            LogField::Mood => log.mood.map(f64::from),
            LogField::SleepHours => log.sleep_hours,
            LogField::SleepQuality => log.sleep_quality.map(f64::from),
            LogField::ExpenseAmount => Some(log.expense_amount),
        }
    }
}

/// Discrete heatmap band for a completion ratio. Boundaries are
/// inclusive-upper:
///
/// | ratio        | band      |
/// |--------------|-----------|
/// | 0.0 – 0.2    | `Minimal` |
/// | 0.2 – 0.5    | `Low`     |
/// | 0.5 – 0.8    | `Medium`  |
/// | above 0.8    | `High`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Minimal,
    Low,
    Medium,
    High,
}

/// The trailing `n` records in ascending date order. Shorter histories
/// return everything they have; empty input yields empty output.
pub fn window_last(records: &[DailyLog], n: usize) -> Vec<DailyLog> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|l| l.date);
    let skip = sorted.len().saturating_sub(n);
    sorted.split_off(skip)
}

/// Mean of `field` over the records that report it. Records missing the
/// field are excluded from both numerator and denominator. When no record
/// carries the field the sentinel is `0.0` — never a panic.
pub fn average(records: &[DailyLog], field: LogField) -> f64 {
    let values: Vec<f64> = records.iter().filter_map(|l| field.extract(l)).collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of `field` over all records, treating absent fields as zero.
pub fn sum(records: &[DailyLog], field: LogField) -> f64 {
    records
        .iter()
        .filter_map(|l| field.extract(l))
        .sum()
}

/// `|completed_habits| / total_habit_count`. The denominator is supplied
/// by the caller — derive it from the live catalog
/// (`HabitCatalog::list().len()`), not a constant, or ratios silently
/// misrepresent consistency when the catalog changes. A zero denominator
/// yields `0.0`.
pub fn completion_ratio(record: &DailyLog, total_habit_count: usize) -> f64 {
    if total_habit_count == 0 {
        return 0.0;
    }
    record.completed_habits.len() as f64 / total_habit_count as f64
}

/// Map a ratio to its heatmap band. See [`Intensity`] for the boundary
/// table.
pub fn bucket_intensity(ratio: f64) -> Intensity {
    if ratio <= 0.2 {
        Intensity::Minimal
    } else if ratio <= 0.5 {
        Intensity::Low
    } else if ratio <= 0.8 {
        Intensity::Medium
    } else {
        Intensity::High
    }
}

/// Headline numbers for the dashboard cards: 7-day averages and spend,
/// plus whether today has been logged yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub avg_mood: f64,
    pub avg_sleep_hours: f64,
    pub total_spent: f64,
    pub logged_today: bool,
}

pub fn dashboard_summary(records: &[DailyLog], today: NaiveDate) -> DashboardSummary {
    let week = window_last(records, 7);
    DashboardSummary {
        avg_mood: average(&week, LogField::Mood),
        avg_sleep_hours: average(&week, LogField::SleepHours),
        total_spent: sum(&week, LogField::ExpenseAmount),
        logged_today: records.iter().any(|l| l.date == today),
    }
}

/// One cell of the habit-consistency heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub ratio: f64,
    pub intensity: Intensity,
}

/// Per-day completion intensity over the trailing `days`, ascending by
/// date. The habit count carries the same caller-supplied-denominator
/// caveat as [`completion_ratio`].
pub fn habit_heatmap(
    records: &[DailyLog],
    days: usize,
    total_habit_count: usize,
) -> Vec<HeatmapCell> {
    window_last(records, days)
        .into_iter()
        .map(|log| {
            let ratio = completion_ratio(&log, total_habit_count);
            HeatmapCell {
                date: log.date,
                ratio,
                intensity: bucket_intensity(ratio),
            }
        })
        .collect()
}
