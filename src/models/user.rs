use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One profile per owner id, created lazily on first authenticated contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: String,
    pub email: Option<String>,
    pub stats: ProfileStats,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counters, initialized to zero. No code path increments them
/// yet; streak computation is a future server-side concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub mood_streak: i32,
    pub journal_streak: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_nested_stats() {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            user_id: "user_1".into(),
            email: Some("a@example.com".into()),
            stats: ProfileStats::default(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["stats"]["moodStreak"], 0);
        assert_eq!(json["stats"]["journalStreak"], 0);
    }
}
