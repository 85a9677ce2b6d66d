use serde::{Deserialize, Serialize};

/// Singleton per installation. Read-only in this core: the streak counter
/// is displayed, not maintained, here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub goals: Vec<String>,
    #[serde(default)]
    pub streak: i32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex".into(),
            goals: vec!["Sleep 8h".into(), "Save $500/mo".into()],
            streak: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_shape() {
        let profile = UserProfile::default();
        assert_eq!(profile.goals.len(), 2);
        assert_eq!(profile.streak, 0);
    }

    #[test]
    fn test_missing_streak_defaults_to_zero() {
        let json = r#"{"name": "Sam", "goals": []}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.streak, 0);
    }
}
