use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::DailyLog;
use crate::storage::KeyValueBackend;

pub const LOGS_KEY: &str = "lifedash_logs";

const SEED_DAYS: usize = 30;
const SEED_NOTE: &str = "Auto-generated history.";

/// Controls the first-read seeding behavior of [`LogStore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedMode {
    /// Seed 30 days of randomized history on first read (default).
    Random,
    /// Seed with a fixed RNG seed so tests get a reproducible history.
    Fixed(u64),
    /// Never seed; a fresh store reads as empty.
    Disabled,
}

/// CRUD over the daily log collection, persisted as a single JSON blob
/// under [`LOGS_KEY`]. Read-modify-write is not atomic across concurrent
/// callers; this core targets a single-user, single-process session, and a
/// multi-writer port must wrap `upsert` in a lock or compare-and-swap.
pub struct LogStore<B: KeyValueBackend> {
    backend: B,
    seed_mode: SeedMode,
}

impl<B: KeyValueBackend> LogStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_seed_mode(backend, SeedMode::Random)
    }

    pub fn with_seed_mode(backend: B, seed_mode: SeedMode) -> Self {
        Self { backend, seed_mode }
    }

    /// Every stored record, in stored order (newest first as seeded; callers
    /// sort when order matters). The first-ever read with nothing stored
    /// materializes and persists the seed history — that is the only case
    /// that may return data without a prior write. A blob that exists but
    /// fails to deserialize is surfaced as `StorageUnavailable`, never as
    /// an empty list.
    pub fn list(&self) -> AppResult<Vec<DailyLog>> {
        match self.backend.get(LOGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(error = %e, "stored log blob failed to deserialize");
                AppError::StorageUnavailable(format!("corrupt log blob: {e}"))
            }),
            None => match self.seed_mode {
                SeedMode::Disabled => Ok(Vec::new()),
                SeedMode::Random => self.seed(StdRng::from_entropy()),
                SeedMode::Fixed(seed) => self.seed(StdRng::seed_from_u64(seed)),
            },
        }
    }

    /// Replace-by-date, append otherwise. The whole collection is written
    /// back in one `set`, so a failed write leaves the previously persisted
    /// records unmodified.
    pub fn upsert(&self, record: DailyLog) -> AppResult<()> {
        record
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut logs = self.list()?;
        match logs.iter_mut().find(|l| l.date == record.date) {
            Some(slot) => *slot = record,
            None => logs.push(record),
        }
        self.persist(&logs)
    }

    fn persist(&self, logs: &[DailyLog]) -> AppResult<()> {
        let raw = serde_json::to_string(logs)
            .map_err(|e| AppError::StorageUnavailable(format!("cannot serialize logs: {e}")))?;
        self.backend.set(LOGS_KEY, &raw)
    }

    fn seed(&self, mut rng: StdRng) -> AppResult<Vec<DailyLog>> {
        let today = Utc::now().date_naive();
        let logs = seed_history(&mut rng, today);
        self.persist(&logs)?;
        tracing::info!(days = logs.len(), "seeded log history on first read");
        Ok(logs)
    }
}

/// 30 days ending at `today`, newest first, no gaps. Values are random but
/// patterned: weekends trend toward better mood, longer sleep, and higher
/// spend, matching what the dashboard charts expect to show.
fn seed_history(rng: &mut StdRng, today: NaiveDate) -> Vec<DailyLog> {
    let mut logs = Vec::with_capacity(SEED_DAYS);
    for i in 0..SEED_DAYS {
        let date = today - Duration::days(i as i64);
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

        let mood_base: i32 = if weekend { 4 } else { 3 };
        let mood = (mood_base + rng.gen_range(-1..=1)).clamp(1, 5);
        let sleep = if weekend {
            7.0 + rng.gen::<f64>() * 2.0
        } else {
            6.0 + rng.gen::<f64>() * 1.5
        };
        let expense = if weekend {
            50.0 + rng.gen::<f64>() * 100.0
        } else {
            10.0 + rng.gen::<f64>() * 30.0
        };
        let completed_habits: BTreeSet<String> = if rng.gen_bool(0.5) {
            ["h1", "h3"]
        } else {
            ["h2", "h4"]
        }
        .iter()
        .map(|s| s.to_string())
        .collect();

        logs.push(DailyLog {
            date,
            mood: Some(mood),
            sleep_hours: Some(round_to(sleep, 10.0)),
            sleep_quality: Some(rng.gen_range(6..=9)),
            expense_amount: round_to(expense, 100.0),
            completed_habits,
            notes: SEED_NOTE.into(),
        });
    }
    logs
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
