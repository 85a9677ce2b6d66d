use crate::error::{AppError, AppResult};
use crate::models::Habit;
use crate::storage::KeyValueBackend;

pub const HABITS_KEY: &str = "lifedash_habits";

/// The five habits every installation starts with.
pub fn default_habits() -> Vec<Habit> {
    vec![
        Habit::new("h1", "Morning Meditation", "🧘", "#6366f1"),
        Habit::new("h2", "Read 30 mins", "📚", "#3b82f6"),
        Habit::new("h3", "Workout", "💪", "#f43f5e"),
        Habit::new("h4", "Drink 2L Water", "💧", "#06b6d4"),
        Habit::new("h5", "No Sugar", "🚫", "#10b981"),
    ]
}

/// Read-only habit catalog. First read with nothing stored persists the
/// defaults; there is no create/edit/delete flow in this core.
pub struct HabitCatalog<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> HabitCatalog<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn list(&self) -> AppResult<Vec<Habit>> {
        match self.backend.get(HABITS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(error = %e, "stored habit blob failed to deserialize");
                AppError::StorageUnavailable(format!("corrupt habit blob: {e}"))
            }),
            None => {
                let habits = default_habits();
                let raw = serde_json::to_string(&habits).map_err(|e| {
                    AppError::StorageUnavailable(format!("cannot serialize habits: {e}"))
                })?;
                self.backend.set(HABITS_KEY, &raw)?;
                Ok(habits)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_first_read_persists_defaults() {
        let backend = MemoryBackend::new();
        let catalog = HabitCatalog::new(backend.clone());

        let habits = catalog.list().unwrap();
        assert_eq!(habits.len(), 5);
        assert_eq!(habits[0].id, "h1");
        assert!(backend.get(HABITS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_stored_catalog_wins_over_defaults() {
        let backend = MemoryBackend::new();
        let stored = vec![Habit::new("h9", "Journal", "📓", "#f59e0b")];
        backend
            .set(HABITS_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let habits = HabitCatalog::new(backend).list().unwrap();
        assert_eq!(habits, stored);
    }

    #[test]
    fn test_corrupt_catalog_surfaces_storage_error() {
        let backend = MemoryBackend::new();
        backend.set(HABITS_KEY, "[{").unwrap();

        let err = HabitCatalog::new(backend).list().unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }

    #[test]
    fn test_default_ids_are_unique() {
        let habits = default_habits();
        let ids: std::collections::BTreeSet<_> = habits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids.len(), habits.len());
    }
}
