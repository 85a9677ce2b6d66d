use crate::error::{AppError, AppResult};
use crate::models::UserProfile;
use crate::storage::KeyValueBackend;

pub const PROFILE_KEY: &str = "lifedash_profile";

/// Singleton profile, read-only in this core. Same read-or-default-and-
/// persist shape as the habit catalog.
pub struct ProfileStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> ProfileStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn get(&self) -> AppResult<UserProfile> {
        match self.backend.get(PROFILE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(error = %e, "stored profile blob failed to deserialize");
                AppError::StorageUnavailable(format!("corrupt profile blob: {e}"))
            }),
            None => {
                let profile = UserProfile::default();
                let raw = serde_json::to_string(&profile).map_err(|e| {
                    AppError::StorageUnavailable(format!("cannot serialize profile: {e}"))
                })?;
                self.backend.set(PROFILE_KEY, &raw)?;
                Ok(profile)
            }
        }
    }
}
